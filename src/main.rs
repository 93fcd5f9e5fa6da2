fn main() {
    ems_console::run();
}
