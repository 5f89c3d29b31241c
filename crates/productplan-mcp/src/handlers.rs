//! MCP Tool Handlers
//!
//! Turns a tool call into exactly one ProductPlan API request using the
//! route table. Argument validation is limited to what is needed to build
//! the request path.

use productplan_api::ApiClient;
use serde_json::{Map, Value};

use crate::routes::{BodyRule, ToolRoute, find_route};
use crate::{Error, Result};

/// Handle a tool call by dispatching to the matching ProductPlan endpoint
pub async fn handle_tool_call(client: &ApiClient, tool_name: &str, arguments: Value) -> Result<Value> {
    let route = find_route(tool_name).ok_or_else(|| Error::UnknownTool(tool_name.to_string()))?;
    let arguments = into_argument_map(arguments)?;

    let path = build_path(route, &arguments)?;
    let body = build_body(route.body, &arguments);

    tracing::info!(tool = route.name, method = %route.verb, %path, "Dispatching tool call");

    let value = client
        .request(route.verb.method(), &path, body.as_ref())
        .await?;
    Ok(value)
}

/// Accept an object or a missing (`null`) argument bag
fn into_argument_map(arguments: Value) -> Result<Map<String, Value>> {
    match arguments {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(Error::invalid_arguments(format!(
            "expected an object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Fill `{param}` placeholders in the route's path template
pub fn build_path(route: &ToolRoute, arguments: &Map<String, Value>) -> Result<String> {
    let mut path = String::with_capacity(route.path.len());
    let mut rest = route.path;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];
        path.push_str(&rest[..start]);
        path.push_str(&path_segment(name, arguments.get(name))?);
        rest = &rest[start + len + 1..];
    }
    path.push_str(rest);

    Ok(path)
}

fn path_segment(name: &str, value: Option<&Value>) -> Result<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        None | Some(Value::Null) | Some(Value::String(_)) => Err(Error::invalid_arguments(
            format!("missing required argument: {}", name),
        )),
        Some(other) => Err(Error::invalid_arguments(format!(
            "{} must be a string, got {}",
            name,
            json_type_name(other)
        ))),
    }
}

/// Assemble the request body according to the route's body rule
pub fn build_body(rule: BodyRule, arguments: &Map<String, Value>) -> Option<Value> {
    let (fields, truthy_only) = match rule {
        BodyRule::None => return None,
        BodyRule::Provided(fields) => (fields, false),
        BodyRule::Truthy(fields) => (fields, true),
    };

    let body: Map<String, Value> = fields
        .iter()
        .filter_map(|field| {
            arguments
                .get(*field)
                .filter(|value| !truthy_only || is_truthy(value))
                .map(|value| (field.to_string(), value.clone()))
        })
        .collect();

    Some(Value::Object(body))
}

/// `false`, `null`, zero and the empty string are falsy; everything else is truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        into_argument_map(value).unwrap()
    }

    fn route(name: &str) -> &'static ToolRoute {
        find_route(name).unwrap()
    }

    #[rstest]
    #[case("list_roadmaps", json!({}), "/roadmaps")]
    #[case("get_roadmap", json!({"id": "r1"}), "/roadmaps/r1")]
    #[case("get_roadmap_bars", json!({"roadmap_id": 42}), "/roadmaps/42/bars")]
    #[case("list_key_results", json!({"objective_id": "o9"}), "/strategy/objectives/o9/key-results")]
    #[case("list_launch_tasks", json!({"launch_id": "l3"}), "/launches/l3/tasks")]
    fn builds_paths(#[case] tool: &str, #[case] arguments: Value, #[case] expected: &str) {
        assert_eq!(build_path(route(tool), &args(arguments)).unwrap(), expected);
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"id": null}))]
    #[case(json!({"id": ""}))]
    fn missing_path_argument_is_rejected(#[case] arguments: Value) {
        let err = build_path(route("get_bar"), &args(arguments)).unwrap_err();
        assert!(err.to_string().contains("missing required argument: id"));
    }

    #[test]
    fn non_scalar_path_argument_is_rejected() {
        let err = build_path(route("get_bar"), &args(json!({"id": ["a"]}))).unwrap_err();
        assert!(err.to_string().contains("id must be a string, got array"));
    }

    #[test]
    fn reads_have_no_body() {
        assert_eq!(build_body(route("get_roadmap").body, &args(json!({"id": "r1"}))), None);
    }

    #[test]
    fn create_copies_provided_fields_verbatim() {
        let body = build_body(
            route("create_bar").body,
            &args(json!({
                "roadmap_id": "r1",
                "lane_id": "l1",
                "name": "Launch",
                "description": "",
                "unrelated": "ignored"
            })),
        );
        assert_eq!(
            body,
            Some(json!({"roadmap_id": "r1", "lane_id": "l1", "name": "Launch", "description": ""}))
        );
    }

    #[test]
    fn update_bar_with_only_name_sends_only_name() {
        let body = build_body(route("update_bar").body, &args(json!({"id": "b1", "name": "New"})));
        assert_eq!(body, Some(json!({"name": "New"})));
    }

    #[test]
    fn update_bar_drops_falsy_fields() {
        let body = build_body(
            route("update_bar").body,
            &args(json!({"id": "b1", "name": "", "start_date": null, "end_date": "2025-03-31"})),
        );
        assert_eq!(body, Some(json!({"end_date": "2025-03-31"})));
    }

    #[test]
    fn update_bar_with_nothing_sends_empty_object() {
        let body = build_body(route("update_bar").body, &args(json!({"id": "b1"})));
        assert_eq!(body, Some(json!({})));
    }

    #[rstest]
    #[case(json!(null), false)]
    #[case(json!(false), false)]
    #[case(json!(0), false)]
    #[case(json!(0.0), false)]
    #[case(json!(""), false)]
    #[case(json!(true), true)]
    #[case(json!(-1), true)]
    #[case(json!("0"), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_truthy(&value), expected);
    }

    #[test]
    fn null_arguments_are_an_empty_bag() {
        assert!(into_argument_map(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        let err = into_argument_map(json!("id")).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments { .. }));
    }
}
