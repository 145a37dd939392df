//! Operation descriptors and the REST-JSON marshalling they drive.

use medialive_models::Shape;
use serde_json::{Map, Value};
use url::Url;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, ServiceError};
use crate::http::{HttpRequest, HttpResponse, Method};

/// Static description of one MediaLive operation.
pub trait Operation {
    /// Operation name, e.g. `DescribeChannel`.
    const NAME: &'static str;
    const METHOD: Method;
    /// Path template with `{member}` placeholders named by wire member.
    const URI: &'static str;
    /// Members sent as query parameters.
    const QUERY: &'static [&'static str] = &[];
    /// Idempotency token member filled with a fresh UUID when absent.
    const IDEMPOTENCY_TOKEN: Option<&'static str> = None;

    type Input: Shape + Send + Sync;
    type Output: Shape + Send;
}

/// Builds the HTTP request for `input`.
///
/// URI and query members are moved out of the JSON body. `GET` and `DELETE`
/// carry no body; `POST` and `PUT` always carry a JSON object.
pub fn marshal<O: Operation>(config: &ClientConfig, input: &O::Input) -> ClientResult<HttpRequest> {
    let mut body = match serde_json::to_value(input)? {
        Value::Object(members) => members,
        other => {
            return Err(ClientError::invalid_request(format!(
                "{} input serialized to {} instead of an object",
                O::NAME,
                other
            )))
        }
    };

    if let Some(token) = O::IDEMPOTENCY_TOKEN {
        body.entry(token)
            .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
    }

    let path = expand_uri::<O>(&mut body)?;
    let mut url = join_path(&config.endpoint, &path);

    let query = take_query_pairs::<O>(&mut body)?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(&query);
    }

    let mut headers = vec![("User-Agent".to_string(), config.user_agent.clone())];
    let body = if O::METHOD.has_body() {
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
        Some(Value::Object(body).to_string())
    } else {
        None
    };

    Ok(HttpRequest {
        method: O::METHOD,
        url,
        headers,
        body,
    })
}

/// Reads the operation output from a response, or the service error it carries.
///
/// An empty 2xx body yields the default output record.
pub fn unmarshal<O: Operation>(response: &HttpResponse) -> ClientResult<O::Output> {
    if !response.is_success() {
        return Err(ServiceError::from_response(response).into());
    }
    if response.body.trim().is_empty() {
        return Ok(O::Output::default());
    }
    Ok(O::Output::from_json(&response.body)?)
}

fn expand_uri<O: Operation>(body: &mut Map<String, Value>) -> ClientResult<String> {
    let mut path = String::with_capacity(O::URI.len());
    let mut rest = O::URI;

    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|offset| start + offset)
            .ok_or_else(|| {
                ClientError::invalid_request(format!("Unterminated URI template: {}", O::URI))
            })?;
        let member = &rest[start + 1..end];

        let value = body
            .remove(member)
            .and_then(|value| scalar_text(&value))
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ClientError::MissingUriMember {
                operation: O::NAME,
                member: member.to_string(),
            })?;

        path.push_str(&rest[..start]);
        path.push_str(&urlencoding::encode(&value));
        rest = &rest[end + 1..];
    }
    path.push_str(rest);

    Ok(path)
}

fn take_query_pairs<O: Operation>(
    body: &mut Map<String, Value>,
) -> ClientResult<Vec<(&'static str, String)>> {
    let mut pairs = Vec::new();
    for &member in O::QUERY {
        match body.remove(member) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for item in items {
                    pairs.push((member, query_text::<O>(member, &item)?));
                }
            }
            Some(value) => pairs.push((member, query_text::<O>(member, &value)?)),
        }
    }
    Ok(pairs)
}

fn query_text<O: Operation>(member: &str, value: &Value) -> ClientResult<String> {
    scalar_text(value).ok_or_else(|| {
        ClientError::invalid_request(format!(
            "{} query member '{}' is not a scalar",
            O::NAME,
            member
        ))
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Appends `path` to the endpoint's own path.
fn join_path(endpoint: &Url, path: &str) -> Url {
    let mut url = endpoint.clone();
    let base = endpoint.path().trim_end_matches('/');
    url.set_path(&format!("{}{}", base, path));
    url.set_query(None);
    url
}
