use yew::prelude::*;

use crate::hooks::{use_api, use_query, QueryState};
use crate::models::DashboardSummary;

use super::shared::{Loading, QueryError};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_api();
    let query = use_query((), move |_| async move { api.dashboard.summary().await });

    let body = match &*query.state {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(error) => html! {
            <QueryError error={error.clone()} fallback="Could not load the dashboard"
                on_retry={query.reload.clone()} />
        },
        QueryState::Ready(summary) => render_summary(summary),
    };

    html! {
        <section class="page dashboard">
            <h1>{"Dashboard"}</h1>
            {body}
        </section>
    }
}

fn render_summary(summary: &DashboardSummary) -> Html {
    html! {
        <>
            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-label">{"Companies"}</span>
                    <span class="stat-value">{summary.total_companies}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{"Departments"}</span>
                    <span class="stat-value">{summary.total_departments}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{"Employees"}</span>
                    <span class="stat-value">{summary.total_employees}</span>
                </div>
            </div>
            <h2>{"Employees by status"}</h2>
            <table class="data-table">
                <thead><tr><th>{"Status"}</th><th>{"Count"}</th></tr></thead>
                <tbody>
                    { for summary.status_breakdown.iter().map(|row| html! {
                        <tr><td>{row.status.label()}</td><td>{row.count}</td></tr>
                    }) }
                </tbody>
            </table>
        </>
    }
}
