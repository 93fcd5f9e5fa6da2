// ============================================================================
// SHARED - Form fields and status blocks used by every page
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::context::Notifier;
use crate::hooks::QueryState;
use crate::models::EntityId;
use crate::services::ApiError;
use crate::viewmodels::{FormErrors, SubmitError};

/// Browser `confirm()`; a missing window counts as "no"
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    pub oninput: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = props.oninput.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let class = if props.error.is_some() { "form-group has-error" } else { "form-group" };

    html! {
        <div {class}>
            <label for={props.name.clone()}>{props.label.clone()}</label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
            />
            if let Some(error) = &props.error {
                <span class="field-error">{error}</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    #[prop_or_default]
    pub selected: Option<String>,
    #[prop_or(AttrValue::Static("Select..."))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    /// `None` when the placeholder is picked
    pub onchange: Callback<Option<String>>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = props.onchange.reform(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        (!value.is_empty()).then_some(value)
    });
    let class = if props.error.is_some() { "form-group has-error" } else { "form-group" };

    html! {
        <div {class}>
            <label for={props.name.clone()}>{props.label.clone()}</label>
            <select id={props.name.clone()} name={props.name.clone()} disabled={props.disabled} {onchange}>
                <option value="" selected={props.selected.is_none()}>{props.placeholder.clone()}</option>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={props.selected.as_deref() == Some(value.as_str())}>
                        {label}
                    </option>
                }) }
            </select>
            if let Some(error) = &props.error {
                <span class="field-error">{error}</span>
            }
        </div>
    }
}

#[function_component(Loading)]
pub fn loading() -> Html {
    html! { <div class="loading"><div class="spinner"></div>{"Loading..."}</div> }
}

#[derive(Properties, PartialEq)]
pub struct QueryErrorProps {
    pub error: ApiError,
    pub fallback: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Failed fetch. Auth failures render nothing: the session is already
/// cleared and the router is redirecting.
#[function_component(QueryError)]
pub fn query_error(props: &QueryErrorProps) -> Html {
    match &props.error {
        ApiError::Auth { .. } => html! {},
        ApiError::NotFound => html! {
            <div class="empty-state">
                <h2>{"Not found"}</h2>
                <p>{"The record you are looking for does not exist."}</p>
            </div>
        },
        error => html! {
            <div class="error-banner">
                <span>{error.user_message(&props.fallback)}</span>
                if let Some(retry) = &props.on_retry {
                    <button class="btn btn-secondary" onclick={retry.reform(|_| ())}>{"Retry"}</button>
                }
            </div>
        },
    }
}

/// Route a failed submit: field errors under the inputs, backend failures
/// to a toast. Backend field rejections go to both. Auth failures stay silent.
pub fn report_submit_error(
    error: SubmitError,
    fallback: &str,
    errors: &UseStateHandle<FormErrors>,
    notifier: &Notifier,
) {
    match error {
        SubmitError::Invalid(invalid) => errors.set(invalid),
        SubmitError::Api(e) if e.is_auth() => {}
        SubmitError::Api(e) => {
            log::warn!("❌ [FORM] {}", e);
            let rejected = FormErrors::from_api(&e);
            if !rejected.is_empty() {
                errors.set(rejected);
            }
            notifier.error(e.user_message(fallback));
        }
    }
}

/// Render a delete failure inline, above the table
pub fn delete_failure_message(error: &ApiError, fallback: &str) -> Option<String> {
    (!error.is_auth()).then(|| error.user_message(fallback))
}

/// `(id, name)` select options, keeping `selected` visible even when the
/// lookup list failed to load or no longer holds it
pub fn id_options<'a>(
    rows: impl IntoIterator<Item = (EntityId, &'a str)>,
    selected: Option<EntityId>,
) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = rows
        .into_iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect();
    if let Some(id) = selected {
        let value = id.to_string();
        if !options.iter().any(|(v, _)| *v == value) {
            options.push((value, format!("#{}", id)));
        }
    }
    options
}

/// Rows of a finished lookup; empty while loading or after a failure
pub fn ready_rows<T>(state: &QueryState<Vec<T>>) -> &[T] {
    match state {
        QueryState::Ready(rows) => rows,
        _ => &[],
    }
}

pub fn parse_id(value: Option<String>) -> Option<EntityId> {
    value.and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_id_missing_from_lookup_is_still_offered() {
        let options = id_options([(1, "Acme"), (2, "Globex")], Some(7));
        assert_eq!(options.len(), 3);
        assert_eq!(options[2], ("7".to_string(), "#7".to_string()));
        assert_eq!(id_options([(1, "Acme")], Some(1)).len(), 1);
    }

    #[test]
    fn select_values_parse_back_to_ids() {
        assert_eq!(parse_id(Some("42".into())), Some(42));
        assert_eq!(parse_id(Some("abc".into())), None);
        assert_eq!(parse_id(None), None);
    }
}
