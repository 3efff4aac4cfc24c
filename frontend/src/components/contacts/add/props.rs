//! Properties of the `ContactAddComponent`.

use yew::prelude::*;

use crate::config::ApiConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct ContactAddProps {
    /// API endpoints used by the form. Changing it rebuilds the HTTP client;
    /// requests already in flight keep the previous one.
    pub config: ApiConfig,

    /// Called with the server-assigned id once the contact has been created.
    pub on_created: Callback<i64>,

    /// Called when the user leaves the form with the back button.
    #[prop_or_default]
    pub on_back: Callback<()>,
}
