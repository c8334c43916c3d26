use axum::{
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::menu::NewMenuLink;

/// Weight as submitted: text from an HTML form, a number or a string from JSON
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WeightInput {
    Number(i64),
    Text(String),
}

/// Body of the add-link submission, exactly as the client sends it
#[derive(Debug, Deserialize)]
pub struct AddLinkForm {
    pub weight: WeightInput,
    pub path: String,
    pub name: String,
}

impl TryFrom<AddLinkForm> for NewMenuLink {
    type Error = ApiError;

    fn try_from(form: AddLinkForm) -> Result<Self, Self::Error> {
        let weight = match &form.weight {
            WeightInput::Number(n) => {
                i32::try_from(*n).map_err(|_| ApiError::InvalidWeight(n.to_string()))?
            }
            WeightInput::Text(text) => text
                .trim()
                .parse::<i32>()
                .map_err(|_| ApiError::InvalidWeight(text.clone()))?,
        };

        Ok(NewMenuLink {
            weight,
            path: form.path,
            name: form.name,
        })
    }
}

/// Add-link submission from either a urlencoded form or a JSON body
///
/// Picks the extractor from `Content-Type`; anything that is not JSON is
/// treated as a form.
#[derive(Debug)]
pub struct LinkSubmission(pub AddLinkForm);

impl<S> FromRequest<S> for LinkSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with("application/json"));

        if is_json {
            let Json(form) = Json::<AddLinkForm>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(form))
        } else {
            let Form(form) = Form::<AddLinkForm>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(form))
        }
    }
}

/// Query parameters for the delete endpoint
///
/// A missing `linkId` matches nothing, so the delete is a no-op.
#[derive(Debug, Deserialize)]
pub struct DeleteLinkQuery {
    #[serde(rename = "linkId")]
    pub link_id: Option<String>,
}
