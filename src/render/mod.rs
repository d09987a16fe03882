//! Form rendering.
//!
//! Turns a [`crate::model::CliModel`] into markup using `{variable}`
//! templates. The default template is an ordinary value
//! ([`FormTemplate::default`]) passed in by the caller; callers that want
//! different markup load their own with [`FormTemplate::load`].

mod form;
mod template;


pub use form::{
    DEFAULT_FIELD_TEMPLATE, DEFAULT_FORM_TEMPLATE, DEFAULT_SUBMIT_LABEL, FormTemplate,
    escape_html, render_form,
};
pub use template::{Template, TemplateError};
