use crate::model::postman::{
    Body, BodyOptions, Header, Item, PathVariable, QueryParam, RawOptions, RequestDetail,
    RequestItem, Url,
};
use crate::model::yaak;

/// Base-url placeholder as Yaak embeds it in request urls.
const BASE_URL_TOKEN: &str = "${[ base_url ]}";
/// Postman variable reference it is rewritten to.
const BASE_URL_VAR: &str = "{{base_url}}";

/// Convert one source request into a Postman collection item.
pub fn convert_request(request: &yaak::HttpRequest) -> Item {
    let body_text = request
        .body
        .as_ref()
        .map(|b| b.text.as_str())
        .filter(|text| !text.is_empty());

    Item::Request(RequestItem {
        name: request.name.clone(),
        request: RequestDetail {
            method: request.method.clone(),
            header: convert_headers(&request.headers),
            url: convert_url(&request.url, &request.url_parameters),
            description: String::new(),
            body: body_text.map(|text| convert_body(text, request.body_type.as_deref())),
        },
        response: Vec::new(),
    })
}

fn convert_headers(headers: &[yaak::Variable]) -> Vec<Header> {
    headers
        .iter()
        .map(|h| Header {
            key: h.name.clone(),
            value: h.value.clone(),
            kind: "text".to_string(),
            enabled: h.enabled,
        })
        .collect()
}

fn convert_url(url: &str, parameters: &[yaak::Variable]) -> Url {
    Url {
        raw: url.replace(BASE_URL_TOKEN, BASE_URL_VAR),
        host: vec![BASE_URL_VAR.to_string()],
        path: path_segments(url),
        variable: path_variables(url, parameters),
        query: query_parameters(parameters),
    }
}

/// Path segments of the url with the base-url placeholder removed; empty
/// segments are discarded.
fn path_segments(url: &str) -> Vec<String> {
    url.replace(BASE_URL_TOKEN, "")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// One path variable per colon-prefixed token in the url, valued from the
/// matching url parameter (empty when absent). Duplicate tokens stay
/// duplicated, in scan order.
fn path_variables(url: &str, parameters: &[yaak::Variable]) -> Vec<PathVariable> {
    path_param_tokens(url)
        .into_iter()
        .map(|name| {
            let value = parameters
                .iter()
                .find(|p| p.name == name)
                .map(|p| p.value.clone())
                .unwrap_or_default();
            PathVariable {
                id: name.clone(),
                key: name,
                value,
                kind: "string".to_string(),
                description: String::new(),
            }
        })
        .collect()
}

/// Every named url parameter that is not a path parameter becomes a query
/// parameter, with the enabled flag inverted to `disabled`.
fn query_parameters(parameters: &[yaak::Variable]) -> Vec<QueryParam> {
    parameters
        .iter()
        .filter(|p| !p.name.is_empty() && !p.name.starts_with(':'))
        .map(|p| QueryParam {
            key: p.name.clone(),
            value: p.value.clone(),
            disabled: !p.enabled,
        })
        .collect()
}

/// Scan `url` for `:name` path-parameter tokens and return the names.
/// A token starts with `:` followed by an ASCII letter or `_`, then letters,
/// digits, or `_`. A `:` followed by anything else (scheme separators, port
/// numbers) is not a token.
fn path_param_tokens(url: &str) -> Vec<String> {
    let bytes = url.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b':'
            && i + 1 < bytes.len()
            && (bytes[i + 1].is_ascii_alphabetic() || bytes[i + 1] == b'_')
        {
            let start = i + 1;
            let mut end = start + 1;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }
            tokens.push(url[start..end].to_string());
            i = end;
        } else {
            i += 1;
        }
    }

    tokens
}

fn convert_body(text: &str, body_type: Option<&str>) -> Body {
    let language = if body_type == Some("application/json") { "json" } else { "text" };
    Body {
        mode: "raw".to_string(),
        raw: text.to_string(),
        options: BodyOptions { raw: RawOptions { language: language.to_string() } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, value: &str, enabled: bool) -> yaak::Variable {
        yaak::Variable {
            name: name.to_string(),
            value: value.to_string(),
            enabled,
        }
    }

    fn base_request() -> yaak::HttpRequest {
        yaak::HttpRequest {
            id: "rq_1".to_string(),
            name: "Get User".to_string(),
            workspace_id: "w1".to_string(),
            folder_id: None,
            method: "GET".to_string(),
            url: "${[ base_url ]}/users/:id".to_string(),
            headers: Vec::new(),
            url_parameters: Vec::new(),
            body: None,
            body_type: None,
        }
    }

    #[test]
    fn test_path_param_tokens_basic() {
        assert_eq!(path_param_tokens("/users/:id/posts/:post_id"), vec!["id", "post_id"]);
    }

    #[test]
    fn test_path_param_tokens_skip_scheme_and_port() {
        assert!(path_param_tokens("https://example.com:8080/users").is_empty());
    }

    #[test]
    fn test_path_param_tokens_duplicates_kept() {
        assert_eq!(path_param_tokens("/:id/compare/:id"), vec!["id", "id"]);
    }

    #[test]
    fn test_url_example_conversion() {
        let params = vec![param("id", "42", true), param("verbose", "true", true)];
        let url = convert_url("${[ base_url ]}/users/:id", &params);

        assert_eq!(url.raw, "{{base_url}}/users/:id");
        assert_eq!(url.host, vec!["{{base_url}}"]);
        assert_eq!(url.path, vec!["users", ":id"]);

        assert_eq!(url.variable.len(), 1);
        assert_eq!(url.variable[0].key, "id");
        assert_eq!(url.variable[0].value, "42");
        assert_eq!(url.variable[0].kind, "string");

        assert_eq!(url.query.len(), 1);
        assert_eq!(url.query[0].key, "verbose");
        assert_eq!(url.query[0].value, "true");
        assert!(!url.query[0].disabled);
    }

    #[test]
    fn test_path_variable_without_matching_parameter_is_empty() {
        let url = convert_url("${[ base_url ]}/users/:id", &[]);
        assert_eq!(url.variable[0].key, "id");
        assert_eq!(url.variable[0].value, "");
    }

    #[test]
    fn test_query_excludes_colon_named_parameters() {
        let params = vec![param(":id", "42", true), param("page", "2", false)];
        let url = convert_url("/users/:id", &params);
        assert_eq!(url.query.len(), 1);
        assert_eq!(url.query[0].key, "page");
        assert!(url.query[0].disabled);
    }

    #[test]
    fn test_query_excludes_unnamed_parameters() {
        let params = vec![param("", "orphan", true)];
        let url = convert_url("/users", &params);
        assert!(url.query.is_empty());
    }

    #[test]
    fn test_headers_mapping() {
        let mut request = base_request();
        request.headers = vec![param("Accept", "application/json", true)];
        let Item::Request(item) = convert_request(&request) else { panic!("expected request") };
        assert_eq!(item.request.header.len(), 1);
        assert_eq!(item.request.header[0].key, "Accept");
        assert_eq!(item.request.header[0].value, "application/json");
        assert_eq!(item.request.header[0].kind, "text");
        assert!(item.request.header[0].enabled);
    }

    #[test]
    fn test_json_body() {
        let mut request = base_request();
        request.body = Some(yaak::RequestBody { text: "{}".to_string() });
        request.body_type = Some("application/json".to_string());
        let Item::Request(item) = convert_request(&request) else { panic!("expected request") };
        let body = item.request.body.expect("body should be present");
        assert_eq!(body.mode, "raw");
        assert_eq!(body.raw, "{}");
        assert_eq!(body.options.raw.language, "json");
    }

    #[test]
    fn test_non_json_body_language_is_text() {
        let mut request = base_request();
        request.body = Some(yaak::RequestBody { text: "hello".to_string() });
        request.body_type = Some("text/plain".to_string());
        let Item::Request(item) = convert_request(&request) else { panic!("expected request") };
        assert_eq!(item.request.body.unwrap().options.raw.language, "text");
    }

    #[test]
    fn test_empty_body_text_omits_body() {
        let mut request = base_request();
        request.body = Some(yaak::RequestBody { text: String::new() });
        let Item::Request(item) = convert_request(&request) else { panic!("expected request") };
        assert!(item.request.body.is_none());

        // And the serialized request has no `body` key at all.
        let value = serde_json::to_value(&item).unwrap();
        assert!(value["request"].get("body").is_none());
    }

    #[test]
    fn test_name_method_copied_and_response_empty() {
        let request = base_request();
        let Item::Request(item) = convert_request(&request) else { panic!("expected request") };
        assert_eq!(item.name, "Get User");
        assert_eq!(item.request.method, "GET");
        assert_eq!(item.request.description, "");
        assert!(item.response.is_empty());
    }
}
