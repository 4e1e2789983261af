//! Adapting an external user payload into the props of a UI component.
//!
//! Run with diagnostics visible:
//!
//! ```text
//! JSONADAPT_ENV=development cargo run --example user_profile
//! ```

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use jsonadapt::{Adapter, FieldDef, RunMode, Schema};

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct VisualComponentProps {
    firstname: Option<String>,
    not_connected_since: Option<DateTime<Utc>>,
}

fn capitalize(value: &Value, _doc: &Value) -> anyhow::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("expected a string, got {value}"))?;
    let mut chars = s.chars();
    Ok(match chars.next() {
        Some(c) => Value::from(c.to_uppercase().collect::<String>() + chars.as_str()),
        None => Value::from(""),
    })
}

fn component_props_schema() -> Result<Schema, jsonadapt::SchemaError> {
    Schema::new()
        .field(
            "firstname",
            FieldDef::new(
                // The older API nests the name under `user`; the newer one
                // exposes it at the top level. First hit wins.
                vec!["user.name", "firstName"],
                |value, _doc| value.as_str().is_some_and(|s| !s.is_empty()),
                capitalize,
                Value::Null,
            ),
        )?
        .field(
            "notConnectedSince",
            FieldDef::new(
                "user.lastDisconnectionDate",
                |value, _doc| {
                    value
                        .as_str()
                        .and_then(|s| s.parse::<DateTime<Utc>>().ok())
                        .is_some_and(|seen| seen < Utc::now())
                },
                |value, _doc| Ok(value.clone()),
                Value::Null,
            ),
        )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Stand-in for a payload fetched from a remote user API.
    let payload = json!({
        "user": {
            "name": "john",
            "lastDisconnectionDate": "2024-06-01T12:00:00Z",
            "age": 34
        }
    });

    let adapter = Adapter::new(RunMode::from_env());
    let props: VisualComponentProps = adapter.adapt_as(&payload, &component_props_schema()?)?;

    println!("{props:#?}");
    Ok(())
}
