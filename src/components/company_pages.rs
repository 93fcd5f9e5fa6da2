// ============================================================================
// COMPANY PAGES - List, create and view/edit
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_api, use_notifier, use_query, QueryState};
use crate::models::{Company, EntityId};
use crate::router::Route;
use crate::viewmodels::{submit_create, submit_update, CompanyForm, FormErrors};

use super::shared::{
    confirm_action, delete_failure_message, report_submit_error, Loading, QueryError, TextField,
};

#[function_component(CompanyListPage)]
pub fn company_list_page() -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let delete_error = use_state(|| None::<String>);
    let query = {
        let api = api.clone();
        use_query((), move |_| async move { api.companies.list().await })
    };

    let on_delete = {
        let delete_error = delete_error.clone();
        let reload = query.reload.clone();
        Callback::from(move |(id, name): (EntityId, String)| {
            if !confirm_action(&format!("Are you sure you want to delete \"{}\"?", name)) {
                return;
            }
            let api = api.clone();
            let notifier = notifier.clone();
            let delete_error = delete_error.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.companies.delete(id).await {
                    Ok(()) => {
                        delete_error.set(None);
                        notifier.success("Company deleted successfully!");
                        reload.emit(());
                    }
                    Err(e) => delete_error.set(delete_failure_message(&e, "Failed to delete the company.")),
                }
            });
        })
    };

    let body = match &*query.state {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(error) => html! {
            <QueryError error={error.clone()} fallback="Could not load companies" on_retry={query.reload.clone()} />
        },
        QueryState::Ready(companies) => html! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Departments"}</th>
                        <th>{"Employees"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for companies.iter().map(|company| company_row(company, &on_delete)) }
                </tbody>
            </table>
        },
    };

    html! {
        <section class="page">
            <h1>{"Companies"}</h1>
            <Link<Route> to={Route::CompanyNew} classes="btn btn-primary">{"Create Company"}</Link<Route>>
            if let Some(message) = &*delete_error {
                <div class="error-banner">{message}</div>
            }
            {body}
        </section>
    }
}

fn company_row(company: &Company, on_delete: &Callback<(EntityId, String)>) -> Html {
    let id = company.id;
    let name = company.name.clone();
    let onclick = on_delete.reform(move |_: MouseEvent| (id, name.clone()));
    html! {
        <tr key={id}>
            <td>{&company.name}</td>
            <td>{company.department_count}</td>
            <td>{company.employee_count}</td>
            <td class="actions">
                <Link<Route> to={Route::Company { id }}>{"View"}</Link<Route>>
                <Link<Route> to={Route::Company { id }}>{"Edit"}</Link<Route>>
                <button class="btn-link danger" {onclick}>{"Delete"}</button>
            </td>
        </tr>
    }
}

#[function_component(CompanyCreatePage)]
pub fn company_create_page() -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let form = use_state(CompanyForm::default);
    let errors = use_state(FormErrors::default);
    let submitting = use_state(|| false);

    let on_name = {
        let form = form.clone();
        Callback::from(move |name: String| form.set(CompanyForm { name }))
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let notifier = notifier.clone();
            let form = form.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match submit_create(&*api.companies, &*form).await {
                    Ok(_) => {
                        notifier.success("Company created successfully!");
                        form.set(CompanyForm::default());
                        errors.set(FormErrors::default());
                    }
                    Err(e) => report_submit_error(e, "Failed to create company.", &errors, &notifier),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section class="page form-page">
            <h1>{"Create Company"}</h1>
            <form onsubmit={on_submit}>
                <TextField label="Company Name" name="name" value={form.name.clone()}
                    error={errors.get("name").map(str::to_string)} oninput={on_name} />
                <button type="submit" class="btn btn-primary" disabled={*submitting}>{"Create Company"}</button>
            </form>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CompanyDetailProps {
    pub id: EntityId,
}

#[function_component(CompanyDetailPage)]
pub fn company_detail_page(props: &CompanyDetailProps) -> Html {
    let api = use_api();
    let query = use_query(props.id, move |id| async move { api.companies.get_by_id(id).await });

    match &*query.state {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(error) => html! {
            <QueryError error={error.clone()} fallback="Could not load the company" on_retry={query.reload.clone()} />
        },
        QueryState::Ready(company) => html! {
            <section class="page form-page">
                <h1>{"Edit Company"}</h1>
                <CompanyEditor company={company.clone()} />
                <CompanyMembers company={company.clone()} />
            </section>
        },
    }
}

#[derive(Properties, PartialEq)]
struct CompanyProps {
    company: Company,
}

#[function_component(CompanyEditor)]
fn company_editor(props: &CompanyProps) -> Html {
    let api = use_api();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let form = {
        let company = props.company.clone();
        use_state(move || CompanyForm::from_company(&company))
    };
    let errors = use_state(FormErrors::default);
    let submitting = use_state(|| false);
    let id = props.company.id;

    let on_name = {
        let form = form.clone();
        Callback::from(move |name: String| form.set(CompanyForm { name }))
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
                match submit_update(&*api.companies, id, &*form).await {
                    Ok(_) => {
                        notifier.success("Company updated successfully!");
                        if let (Some(navigator), Some(list)) = (navigator, Route::Company { id }.after_update()) {
                            navigator.push(&list);
                        }
                    }
                    Err(e) => {
                        report_submit_error(e, "Failed to update company.", &errors, &notifier);
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <form onsubmit={on_submit}>
            <TextField label="Company Name" name="name" value={form.name.clone()}
                error={errors.get("name").map(str::to_string)} oninput={on_name} />
            <button type="submit" class="btn btn-primary" disabled={*submitting}>{"Update Company"}</button>
        </form>
    }
}

/// Departments and employees the backend embeds in the company body
#[function_component(CompanyMembers)]
fn company_members(props: &CompanyProps) -> Html {
    let company = &props.company;
    let department_name = |id: EntityId| {
        company
            .departments
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| format!("#{}", id))
    };

    html! {
        <>
            <h2>{"Departments"}</h2>
            <table class="data-table">
                <thead><tr><th>{"Name"}</th><th>{"ID"}</th><th>{"Employees"}</th></tr></thead>
                <tbody>
                    { for company.departments.iter().map(|d| html! {
                        <tr key={d.id}>
                            <td><Link<Route> to={Route::Department { id: d.id }}>{&d.name}</Link<Route>></td>
                            <td>{d.id}</td>
                            <td>{d.employee_count}</td>
                        </tr>
                    }) }
                </tbody>
            </table>

            <h2>{"Employees"}</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Mobile"}</th>
                        <th>{"Address"}</th>
                        <th>{"Designation"}</th>
                        <th>{"Department"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for company.employees.iter().map(|e| html! {
                        <tr key={e.id}>
                            <td><Link<Route> to={Route::Employee { id: e.id }}>{&e.name}</Link<Route>></td>
                            <td>{&e.email}</td>
                            <td>{&e.mobile}</td>
                            <td>{&e.address}</td>
                            <td>{&e.designation}</td>
                            <td>{department_name(e.department)}</td>
                            <td>{e.status.label()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </>
    }
}
