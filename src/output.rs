use serde::Serialize;
use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("SQLREF_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl OutputMode {
    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Text)
    }
}

pub fn success_envelope<T: Serialize>(command: &str, data: T) -> serde_json::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "status": "ok",
        "command": command,
        "data": serde_json::to_value(data)?,
    }))
}

pub fn error_envelope(kind: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "status": "error",
        "kind": kind,
        "message": message,
    })
}

pub fn emit_success<T: Serialize>(command: &str, data: T) -> anyhow::Result<()> {
    let envelope = success_envelope(command, data)?;
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let value = success_envelope("show", serde_json::json!({"id": "select"})).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["command"], "show");
        assert_eq!(value["data"]["id"], "select");
    }

    #[test]
    fn test_error_envelope() {
        let value = error_envelope("not_found", "Topic not found: x");
        assert_eq!(value["status"], "error");
        assert_eq!(value["kind"], "not_found");
    }
}
