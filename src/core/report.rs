use crate::core::crew::CrewOutput;
use crate::core::task::TaskOutput;
use crate::core::tool::FALLBACK_SEPARATOR;
use crate::domain::model::BusinessRecord;
use std::fmt::Write;

#[derive(Debug, PartialEq)]
enum ParsedOutput {
    Extracted(BusinessRecord),
    Fallback { error: String, record: BusinessRecord },
    Unstructured,
}

fn parse_output(raw: &str) -> ParsedOutput {
    if let Some(rest) = raw.strip_prefix("Error: ") {
        if let Some((error, mock)) = rest.rsplit_once(FALLBACK_SEPARATOR) {
            if let Ok(record) = serde_json::from_str::<BusinessRecord>(mock) {
                return ParsedOutput::Fallback {
                    error: error.to_string(),
                    record,
                };
            }
        }
    }

    let Ok(payload) = serde_json::from_str::<serde_json::Value>(raw) else {
        return ParsedOutput::Unstructured;
    };

    // The service wraps results in `data`; some deployments return the record bare.
    let candidate = payload.get("data").cloned().unwrap_or(payload);
    match serde_json::from_value::<BusinessRecord>(candidate) {
        Ok(record) => ParsedOutput::Extracted(record),
        Err(_) => ParsedOutput::Unstructured,
    }
}

fn field(out: &mut String, label: &str, value: Option<&str>) {
    let value = value.filter(|v| !v.trim().is_empty()).unwrap_or("Not found");
    let _ = writeln!(out, "  {:<14} {}", format!("{}:", label), value);
}

fn render_record(out: &mut String, record: &BusinessRecord) {
    field(out, "Name", Some(&record.name));
    field(out, "Opening hours", record.opening_hours.as_deref());
    field(out, "Phone", record.phone.as_deref());
    field(out, "Email", record.email.as_deref());
    field(out, "Wi-Fi", record.wifi.as_deref());
}

fn render_task(out: &mut String, task: &TaskOutput) {
    let _ = writeln!(out, "Business information for {}", task.input);
    let _ = writeln!(
        out,
        "(by {} via {}, {} ms)",
        task.agent_role,
        task.tool_name,
        (task.finished_at - task.started_at).num_milliseconds()
    );
    out.push('\n');

    match parse_output(&task.raw) {
        ParsedOutput::Extracted(record) => render_record(out, &record),
        ParsedOutput::Fallback { error, record } => {
            render_record(out, &record);
            out.push('\n');
            let _ = writeln!(
                out,
                "Note: extraction failed ({}); the details above are placeholder data.",
                error
            );
        }
        ParsedOutput::Unstructured => {
            let _ = writeln!(out, "  No structured record found in the extraction output.");
        }
    }

    out.push('\n');
    let _ = writeln!(out, "Raw output:");
    let _ = writeln!(out, "{}", task.raw);
}

/// Human-readable presentation of every task in the crew output.
pub fn render(output: &CrewOutput) -> String {
    let mut out = String::new();

    for (index, task) in output.tasks_output.iter().enumerate() {
        if index > 0 {
            out.push_str("\n----------------------------------------\n\n");
        }
        render_task(&mut out, task);
    }

    if output.tasks_output.is_empty() {
        out.push_str(&output.raw);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tool::fallback_output;
    use chrono::Utc;

    fn crew_output(raw: &str) -> CrewOutput {
        let now = Utc::now();
        CrewOutput {
            raw: raw.to_string(),
            tasks_output: vec![TaskOutput {
                description: "Extract".to_string(),
                expected_output: "Structured".to_string(),
                agent_role: "Data Extraction Specialist".to_string(),
                tool_name: "firecrawl_extraction".to_string(),
                input: "cafe.example".to_string(),
                raw: raw.to_string(),
                started_at: now,
                finished_at: now,
            }],
        }
    }

    #[test]
    fn test_parse_extracted_payload() {
        let raw = r#"{"success":true,"data":{"name":"Corner Cafe","wifi":"Free"}}"#;
        match parse_output(raw) {
            ParsedOutput::Extracted(record) => {
                assert_eq!(record.name, "Corner Cafe");
                assert_eq!(record.wifi.as_deref(), Some("Free"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_fallback_output() {
        let raw = fallback_output("cafe.example", &"connection refused");
        assert_eq!(
            parse_output(&raw),
            ParsedOutput::Fallback {
                error: "connection refused".to_string(),
                record: BusinessRecord::fallback("cafe.example"),
            }
        );
    }

    #[test]
    fn test_parse_unstructured() {
        assert_eq!(parse_output("plain text"), ParsedOutput::Unstructured);
        assert_eq!(parse_output(r#"{"data":{"phone":"1"}}"#), ParsedOutput::Unstructured);
    }

    #[test]
    fn test_render_success_lists_fields() {
        let text = render(&crew_output(r#"{"data":{"name":"Corner Cafe","phone":"+1 555 0100"}}"#));

        assert!(text.starts_with("Business information for cafe.example"));
        assert!(text.contains("Corner Cafe"));
        assert!(text.contains("+1 555 0100"));
        assert!(text.contains("Email:         Not found"));
        assert!(!text.contains("placeholder"));
        assert!(text.contains("Raw output:"));
    }

    #[test]
    fn test_render_fallback_adds_note() {
        let raw = fallback_output("cafe.example", &"timeout");
        let text = render(&crew_output(&raw));

        assert!(text.contains("contact@cafe.example"));
        assert!(text.contains("Note: extraction failed (timeout)"));
        assert!(text.contains(&raw));
    }
}
