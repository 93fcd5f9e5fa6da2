// ============================================================================
// EMPLOYEE PAGES - Paged list, create, view/edit and the signed-in profile
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_api, use_notifier, use_query, use_session, QueryState};
use crate::models::{Company, Department, Employee, EmployeeStatus, EntityId, Role};
use crate::router::Route;
use crate::utils::EMPLOYEE_PAGE_SIZE;
use crate::viewmodels::{
    departments_for_company, submit_create, submit_update, EmployeeForm, FormErrors, Page,
};

use super::shared::{
    confirm_action, delete_failure_message, id_options, parse_id, ready_rows, report_submit_error,
    Loading, QueryError, SelectField, TextField,
};

fn name_of<'a>(rows: impl IntoIterator<Item = (EntityId, &'a str)>, id: EntityId) -> String {
    rows.into_iter()
        .find(|(row_id, _)| *row_id == id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("#{}", id))
}

#[function_component(EmployeeListPage)]
pub fn employee_list_page() -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let delete_error = use_state(|| None::<String>);
    let page = use_state(|| Page::first(EMPLOYEE_PAGE_SIZE));
    let employees = {
        let api = api.clone();
        use_query((), move |_| async move { api.employees.list().await })
    };
    let company_lookup = {
        let api = api.clone();
        use_query((), move |_| async move { api.companies.list().await })
    };
    let department_lookup = {
        let api = api.clone();
        use_query((), move |_| async move { api.departments.list().await })
    };
    let companies = ready_rows(&*company_lookup.state);
    let departments = ready_rows(&*department_lookup.state);

    let on_delete = {
        let delete_error = delete_error.clone();
        let reload = employees.reload.clone();
        Callback::from(move |(id, name): (EntityId, String)| {
            if !confirm_action(&format!("Are you sure you want to delete \"{}\"?", name)) {
                return;
            }
            let api = api.clone();
            let notifier = notifier.clone();
            let delete_error = delete_error.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.employees.delete(id).await {
                    Ok(()) => {
                        delete_error.set(None);
                        notifier.success("Employee deleted successfully!");
                        reload.emit(());
                    }
                    Err(e) => delete_error.set(delete_failure_message(&e, "Failed to delete the employee.")),
                }
            });
        })
    };

    let body = match &*employees.state {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(error) => html! {
            <QueryError error={error.clone()} fallback="Could not load employees" on_retry={employees.reload.clone()} />
        },
        QueryState::Ready(rows) => {
            let total = rows.len();
            let current = page.clamped(total);
            let on_previous = {
                let page = page.clone();
                Callback::from(move |_: MouseEvent| page.set(current.previous()))
            };
            let on_next = {
                let page = page.clone();
                Callback::from(move |_: MouseEvent| page.set(current.next(total)))
            };
            html! {
                <>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Email"}</th>
                                <th>{"Mobile"}</th>
                                <th>{"Designation"}</th>
                                <th>{"Company"}</th>
                                <th>{"Department"}</th>
                                <th>{"Status"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for current.slice(rows).iter().map(|e| employee_row(e, companies, departments, &on_delete)) }
                        </tbody>
                    </table>
                    <div class="pagination">
                        <button class="btn btn-secondary" disabled={!current.has_previous()} onclick={on_previous}>{"Previous"}</button>
                        <span>{format!("Page {} of {}", current.number, current.page_count(total))}</span>
                        <button class="btn btn-secondary" disabled={!current.has_next(total)} onclick={on_next}>{"Next"}</button>
                    </div>
                </>
            }
        }
    };

    html! {
        <section class="page">
            <h1>{"Employees"}</h1>
            <Link<Route> to={Route::EmployeeNew} classes="btn btn-primary">{"Create Employee"}</Link<Route>>
            if let Some(message) = &*delete_error {
                <div class="error-banner">{message}</div>
            }
            {body}
        </section>
    }
}

fn employee_row(
    employee: &Employee,
    companies: &[Company],
    departments: &[Department],
    on_delete: &Callback<(EntityId, String)>,
) -> Html {
    let id = employee.id;
    let name = employee.name.clone();
    let onclick = on_delete.reform(move |_: MouseEvent| (id, name.clone()));
    html! {
        <tr key={id}>
            <td>{&employee.name}</td>
            <td>{&employee.email}</td>
            <td>{&employee.mobile}</td>
            <td>{&employee.designation}</td>
            <td>{name_of(companies.iter().map(|c| (c.id, c.name.as_str())), employee.company)}</td>
            <td>{name_of(departments.iter().map(|d| (d.id, d.name.as_str())), employee.department)}</td>
            <td>{employee.status.label()}</td>
            <td class="actions">
                <Link<Route> to={Route::Employee { id }}>{"View"}</Link<Route>>
                <Link<Route> to={Route::Employee { id }}>{"Edit"}</Link<Route>>
                <button class="btn-link danger" {onclick}>{"Delete"}</button>
            </td>
        </tr>
    }
}

#[function_component(EmployeeCreatePage)]
pub fn employee_create_page() -> Html {
    html! {
        <section class="page form-page">
            <h1>{"Create Employee"}</h1>
            <EmployeeEditor />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmployeeDetailProps {
    pub id: EntityId,
}

#[function_component(EmployeeDetailPage)]
pub fn employee_detail_page(props: &EmployeeDetailProps) -> Html {
    html! { <EmployeeRecord id={props.id} read_only=false /> }
}

/// The signed-in user's own employee record; read-only for the Employee role
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_session();
    let read_only = session.role == Some(Role::Employee);

    match session.employee_id {
        Some(id) => html! { <EmployeeRecord {id} {read_only} /> },
        None => html! {
            <section class="page">
                <h1>{"Profile"}</h1>
                <div class="empty-state">
                    <p>{"No employee record is linked to this account."}</p>
                </div>
            </section>
        },
    }
}

#[derive(Properties, PartialEq)]
struct EmployeeRecordProps {
    id: EntityId,
    read_only: bool,
}

#[function_component(EmployeeRecord)]
fn employee_record(props: &EmployeeRecordProps) -> Html {
    let api = use_api();
    let query = use_query(props.id, move |id| async move { api.employees.find_by_id(id).await });
    let title = if props.read_only { "My Profile" } else { "Edit Employee" };

    let body = match &*query.state {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(error) => html! {
            <QueryError error={error.clone()} fallback="Could not load the employee" on_retry={query.reload.clone()} />
        },
        QueryState::Ready(None) => html! {
            <div class="empty-state">
                <p>{"Employee not found."}</p>
            </div>
        },
        QueryState::Ready(Some(employee)) => html! {
            <EmployeeEditor employee={Some(employee.clone())} read_only={props.read_only} />
        },
    };

    html! {
        <section class="page form-page">
            <h1>{title}</h1>
            {body}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct EmployeeEditorProps {
    /// `None` creates a new employee
    #[prop_or_default]
    employee: Option<Employee>,
    #[prop_or_default]
    read_only: bool,
}

#[function_component(EmployeeEditor)]
fn employee_editor(props: &EmployeeEditorProps) -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let form = {
        let employee = props.employee.clone();
        use_state(move || match &employee {
            Some(employee) => EmployeeForm::from_employee(employee),
            None => EmployeeForm::new_employee(),
        })
    };
    let errors = use_state(FormErrors::default);
    let submitting = use_state(|| false);
    let company_lookup = {
        let api = api.clone();
        use_query((), move |_| async move { api.companies.list().await })
    };
    let department_lookup = {
        let api = api.clone();
        use_query((), move |_| async move { api.departments.list().await })
    };
    let companies = ready_rows(&*company_lookup.state);
    let departments = ready_rows(&*department_lookup.state);
    let existing_id = props.employee.as_ref().map(|e| e.id);
    let disabled = props.read_only;

    let text = |apply: fn(&mut EmployeeForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let pick = |apply: fn(&mut EmployeeForm, Option<String>)| {
        let form = form.clone();
        Callback::from(move |value: Option<String>| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_company = {
        let form = form.clone();
        let departments = departments.to_vec();
        Callback::from(move |value: Option<String>| {
            let mut next = (*form).clone();
            next.select_company(parse_id(value), &departments);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if disabled {
                return;
            }
            let api = api.clone();
            let notifier = notifier.clone();
            let navigator = navigator.clone();
            let form = form.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match existing_id {
                    Some(id) => match submit_update(&*api.employees, id, &*form).await {
                        Ok(_) => {
                            notifier.success("Employee updated successfully!");
                            if let (Some(navigator), Some(list)) = (navigator, Route::Employee { id }.after_update()) {
                                navigator.push(&list);
                            }
                            return;
                        }
                        Err(e) => report_submit_error(e, "Failed to update the employee.", &errors, &notifier),
                    },
                    None => match submit_create(&*api.employees, &*form).await {
                        Ok(_) => {
                            notifier.success("Employee created successfully!");
                            form.set(EmployeeForm::new_employee());
                            errors.set(FormErrors::default());
                        }
                        Err(e) => report_submit_error(e, "Failed to create the employee.", &errors, &notifier),
                    },
                }
                submitting.set(false);
            });
        })
    };

    let error = |field: &str| errors.get(field).map(str::to_string);
    let company_options = id_options(companies.iter().map(|c| (c.id, c.name.as_str())), form.company);
    let department_options = id_options(
        departments_for_company(departments, form.company)
            .iter()
            .map(|d| (d.id, d.name.as_str()))
            .collect::<Vec<_>>(),
        form.department,
    );
    let status_options: Vec<(String, String)> = EmployeeStatus::ALL
        .iter()
        .map(|s| (s.label().to_string(), s.label().to_string()))
        .collect();
    let role_options: Vec<(String, String)> = Role::ALL
        .iter()
        .map(|r| (r.as_str().to_string(), r.as_str().to_string()))
        .collect();
    let submit_label = if existing_id.is_some() { "Update Employee" } else { "Create Employee" };

    html! {
        <form onsubmit={on_submit}>
            <TextField label="Name" name="name" value={form.name.clone()} {disabled}
                error={error("name")} oninput={text(|f, v| f.name = v)} />
            <TextField label="Email" name="email" input_type="email" value={form.email.clone()} {disabled}
                error={error("email")} oninput={text(|f, v| f.email = v)} />
            <TextField label="Mobile" name="mobile" value={form.mobile.clone()} {disabled}
                error={error("mobile")} oninput={text(|f, v| f.mobile = v)} />
            <TextField label="Address" name="address" value={form.address.clone()} {disabled}
                error={error("address")} oninput={text(|f, v| f.address = v)} />
            <TextField label="Designation" name="designation" value={form.designation.clone()} {disabled}
                error={error("designation")} oninput={text(|f, v| f.designation = v)} />
            <TextField label="Username" name="username" value={form.username.clone()} {disabled}
                error={error("username")} oninput={text(|f, v| f.username = v)} />
            if form.is_new {
                <TextField label="Password" name="password" input_type="password" value={form.password.clone()}
                    error={error("password")} oninput={text(|f, v| f.password = v)} />
            }
            <SelectField label="Company" name="company" placeholder="Select a company" {disabled}
                options={company_options} selected={form.company.map(|id| id.to_string())}
                error={error("company")} onchange={on_company} />
            <SelectField label="Department" name="department" placeholder="Select a department" {disabled}
                options={department_options} selected={form.department.map(|id| id.to_string())}
                error={error("department")} onchange={pick(|f, v| f.department = parse_id(v))} />
            <SelectField label="Status" name="status" placeholder="Select status" {disabled}
                options={status_options} selected={form.status.map(|s| s.label().to_string())}
                error={error("status")} onchange={pick(|f, v| f.status = v.as_deref().and_then(EmployeeStatus::parse))} />
            <SelectField label="Role" name="role" placeholder="Select role" {disabled}
                options={role_options} selected={form.role.map(|r| r.as_str().to_string())}
                error={error("role")} onchange={pick(|f, v| f.role = v.as_deref().and_then(Role::parse))} />
            if let Some(employee) = &props.employee {
                { employment_facts(employee) }
            }
            <button type="submit" class="btn btn-primary" disabled={disabled || *submitting}>{submit_label}</button>
        </form>
    }
}

/// Server-derived dates, present once the employee is hired
fn employment_facts(employee: &Employee) -> Html {
    html! {
        <>
            if let Some(hired_on) = employee.hired_on {
                <div class="form-group">
                    <label>{"Hired On"}</label>
                    <input value={hired_on.format("%Y-%m-%d").to_string()} disabled=true />
                </div>
            }
            if let Some(days) = employee.days_employed {
                <div class="form-group">
                    <label>{"Days Employed"}</label>
                    <input value={days.to_string()} disabled=true />
                </div>
            }
        </>
    }
}
