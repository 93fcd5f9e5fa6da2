// ============================================================================
// DEPARTMENT PAGES - List, create and view/edit
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_api, use_notifier, use_query, QueryState};
use crate::models::{Company, Department, EntityId};
use crate::router::Route;
use crate::viewmodels::{submit_create, submit_update, DepartmentForm, FormErrors};

use super::shared::{
    confirm_action, delete_failure_message, id_options, parse_id, ready_rows, report_submit_error,
    Loading, QueryError, SelectField, TextField,
};

#[function_component(DepartmentListPage)]
pub fn department_list_page() -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let delete_error = use_state(|| None::<String>);
    let departments = {
        let api = api.clone();
        use_query((), move |_| async move { api.departments.list().await })
    };
    let company_lookup = {
        let api = api.clone();
        use_query((), move |_| async move { api.companies.list().await })
    };
    let companies = ready_rows(&*company_lookup.state);

    let on_delete = {
        let delete_error = delete_error.clone();
        let reload = departments.reload.clone();
        Callback::from(move |(id, name): (EntityId, String)| {
            if !confirm_action(&format!("Are you sure you want to delete \"{}\"?", name)) {
                return;
            }
            let api = api.clone();
            let notifier = notifier.clone();
            let delete_error = delete_error.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.departments.delete(id).await {
                    Ok(()) => {
                        delete_error.set(None);
                        notifier.success("Department deleted successfully!");
                        reload.emit(());
                    }
                    Err(e) => delete_error.set(delete_failure_message(&e, "Failed to delete the department.")),
                }
            });
        })
    };

    let body = match &*departments.state {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(error) => html! {
            <QueryError error={error.clone()} fallback="Could not load departments" on_retry={departments.reload.clone()} />
        },
        QueryState::Ready(rows) => html! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Company"}</th>
                        <th>{"Number of Employees"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|d| department_row(d, companies, &on_delete)) }
                </tbody>
            </table>
        },
    };

    html! {
        <section class="page">
            <h1>{"Departments"}</h1>
            <Link<Route> to={Route::DepartmentNew} classes="btn btn-primary">{"Create Department"}</Link<Route>>
            if let Some(message) = &*delete_error {
                <div class="error-banner">{message}</div>
            }
            {body}
        </section>
    }
}

fn department_row(
    department: &Department,
    companies: &[Company],
    on_delete: &Callback<(EntityId, String)>,
) -> Html {
    let id = department.id;
    let name = department.name.clone();
    let company = companies
        .iter()
        .find(|c| c.id == department.company)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("#{}", department.company));
    let onclick = on_delete.reform(move |_: MouseEvent| (id, name.clone()));
    html! {
        <tr key={id}>
            <td>{&department.name}</td>
            <td>{company}</td>
            <td>{department.employee_count}</td>
            <td class="actions">
                <Link<Route> to={Route::Department { id }}>{"View"}</Link<Route>>
                <Link<Route> to={Route::Department { id }}>{"Edit"}</Link<Route>>
                <button class="btn-link danger" {onclick}>{"Delete"}</button>
            </td>
        </tr>
    }
}

#[function_component(DepartmentCreatePage)]
pub fn department_create_page() -> Html {
    html! {
        <section class="page form-page">
            <h1>{"Create Department"}</h1>
            <DepartmentEditor />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct DepartmentDetailProps {
    pub id: EntityId,
}

#[function_component(DepartmentDetailPage)]
pub fn department_detail_page(props: &DepartmentDetailProps) -> Html {
    let api = use_api();
    let query = use_query(props.id, move |id| async move { api.departments.get_by_id(id).await });

    match &*query.state {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(error) => html! {
            <QueryError error={error.clone()} fallback="Could not load the department" on_retry={query.reload.clone()} />
        },
        QueryState::Ready(department) => html! {
            <section class="page form-page">
                <h1>{"Edit Department"}</h1>
                <DepartmentEditor department={Some(department.clone())} />
            </section>
        },
    }
}

#[derive(Properties, PartialEq)]
struct DepartmentEditorProps {
    /// `None` creates a new department
    #[prop_or_default]
    department: Option<Department>,
}

#[function_component(DepartmentEditor)]
fn department_editor(props: &DepartmentEditorProps) -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let form = {
        let department = props.department.clone();
        use_state(move || department.as_ref().map(DepartmentForm::from_department).unwrap_or_default())
    };
    let errors = use_state(FormErrors::default);
    let submitting = use_state(|| false);
    let companies = {
        let api = api.clone();
        use_query((), move |_| async move { api.companies.list().await })
    };
    let existing_id = props.department.as_ref().map(|d| d.id);

    let on_name = {
        let form = form.clone();
        Callback::from(move |name: String| form.set(DepartmentForm { name, ..(*form).clone() }))
    };
    let on_company = {
        let form = form.clone();
        Callback::from(move |value: Option<String>| {
            form.set(DepartmentForm {
                company: parse_id(value),
                ..(*form).clone()
            })
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let notifier = notifier.clone();
            let navigator = navigator.clone();
            let form = form.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match existing_id {
                    Some(id) => submit_update(&*api.departments, id, &*form).await,
                    None => submit_create(&*api.departments, &*form).await,
                };
                match result {
                    Ok(_) if existing_id.is_some() => {
                        notifier.success("Department updated successfully!");
                        let list = existing_id.and_then(|id| Route::Department { id }.after_update());
                        if let (Some(navigator), Some(list)) = (navigator, list) {
                            navigator.push(&list);
                            return;
                        }
                        errors.set(FormErrors::default());
                    }
                    Ok(_) => {
                        notifier.success("Department created successfully!");
                        form.set(DepartmentForm::default());
                        errors.set(FormErrors::default());
                    }
                    Err(e) => {
                        let fallback = if existing_id.is_some() {
                            "Failed to update department. Please try again."
                        } else {
                            "Failed to create department. Please try again."
                        };
                        report_submit_error(e, fallback, &errors, &notifier);
                    }
                }
                submitting.set(false);
            });
        })
    };

    let company_list = ready_rows(&*companies.state);
    let options = id_options(company_list.iter().map(|c| (c.id, c.name.as_str())), form.company);
    let label = if existing_id.is_some() { "Update Department" } else { "Create Department" };

    html! {
        <form onsubmit={on_submit}>
            <TextField label="Department Name" name="name" value={form.name.clone()}
                error={errors.get("name").map(str::to_string)} oninput={on_name} />
            <SelectField label="Company" name="company" placeholder="Select a company" {options}
                selected={form.company.map(|id| id.to_string())}
                error={errors.get("company").map(str::to_string)} onchange={on_company} />
            if let Some(department) = &props.department {
                <div class="form-group">
                    <label>{"Number of Employees"}</label>
                    <input value={department.employee_count.to_string()} disabled=true />
                </div>
            }
            <button type="submit" class="btn btn-primary" disabled={*submitting}>{label}</button>
        </form>
    }
}
