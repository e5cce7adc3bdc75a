use clap::ValueEnum;
use dothttp_lib::syntax::{Diagnostic, Severity};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_text_from_model<T: Serialize + ?Sized>(model: &T) -> String {
    let value = serde_json::to_value(model).unwrap_or(Value::Null);
    render_value(&value, 0)
}

fn render_value(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => format!("{pad}{b}\n"),
        Value::Number(n) => format!("{pad}{n}\n"),
        Value::String(s) => s.lines().map(|line| format!("{pad}{line}\n")).collect(),
        Value::Array(arr) => {
            let mut s = String::new();
            for item in arr {
                match item {
                    Value::Array(_) | Value::Object(_) => {
                        s.push_str(&format!("{pad}-\n"));
                        s.push_str(&render_value(item, indent + 2));
                    }
                    _ => {
                        let rendered = render_value(item, 0);
                        s.push_str(&format!("{}- {}\n", pad, rendered.trim_end()));
                    }
                }
            }
            s
        }
        Value::Object(map) => {
            let mut s = String::new();
            for (k, v) in map {
                match v {
                    Value::Null => {}
                    Value::Array(a) if a.is_empty() => {}
                    Value::Object(o) if o.is_empty() => {}
                    Value::String(str_val) if str_val.contains('\n') => {
                        s.push_str(&format!("{pad}{k}:\n"));
                        s.push_str(&render_value(v, indent + 2));
                    }
                    Value::Array(_) | Value::Object(_) => {
                        s.push_str(&format!("{pad}{k}:\n"));
                        s.push_str(&render_value(v, indent + 2));
                    }
                    _ => {
                        let v_str = match v {
                            Value::String(str_val) => str_val.clone(),
                            value => value.to_string(),
                        };
                        s.push_str(&format!("{pad}{k}: {v_str}\n"));
                    }
                }
            }
            s
        }
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => render_text_from_model(model),
            OutputFormat::Json => {
                with_newline(serde_json::to_string_pretty(model).unwrap_or_default())
            }
        }
    }

    pub fn format_list<T: Serialize>(&self, list: &[T], title: &str, empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text => {
                if list.is_empty() {
                    format!("{empty_msg}\n")
                } else {
                    let content = render_text_from_model(list);
                    if title.is_empty() {
                        content
                    } else {
                        format!("{title}\n{content}")
                    }
                }
            }
            OutputFormat::Json => with_newline(
                serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string()),
            ),
        }
    }

    /// One line per diagnostic followed by a summary in text mode, a JSON
    /// array otherwise.
    pub fn format_diagnostics(&self, diagnostics: &[Diagnostic]) -> String {
        match self.engine {
            OutputFormat::Text => {
                let mut out: String = diagnostics.iter().map(|d| format!("{d}\n")).collect();
                let errors = count(diagnostics, Severity::Error);
                let warnings = count(diagnostics, Severity::Warning);
                out.push_str(&format!("{errors} error(s), {warnings} warning(s)\n"));
                out
            }
            OutputFormat::Json => with_newline(
                serde_json::to_string_pretty(diagnostics).unwrap_or_else(|_| "[]".to_string()),
            ),
        }
    }
}

fn count(diagnostics: &[Diagnostic], severity: Severity) -> usize {
    diagnostics.iter().filter(|d| d.severity == severity).count()
}

fn with_newline(mut s: String) -> String {
    s.push('\n');
    s
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
