//! One-shot lookup from the command line.
//!
//! Drives the same `LookupController` as the web page: validate, dispatch, complete,
//! render. Only the transport differs.

use std::fmt::Write;

use anyhow::{anyhow, bail};
use log::info;
use tzl_core::client::ZoningClient;
use tzl_core::config::ClientConfig;
use tzl_core::view::{render, ResultView};
use tzl_core::LookupController;

use crate::OutputFormat;

pub async fn run_lookup(city: &str, config: ClientConfig, format: OutputFormat) -> anyhow::Result<()> {
    let mut controller = LookupController::new();
    controller.set_input(city);
    let Some(ticket) = controller.begin_submit() else {
        bail!("City name cannot be empty");
    };

    let client = ZoningClient::new(config)?;
    info!("Looking up zoning ordinance for {}", ticket.query());
    let outcome = client.lookup(ticket.query()).await;
    controller.complete(&ticket, outcome);

    println!("{}", render_output(&controller, format)?);

    match render(&controller).result {
        ResultView::Failed(card) => Err(anyhow!("Lookup failed: {}", card.message)),
        _ => Ok(()),
    }
}

/// Format the controller's current view.
pub fn render_output(controller: &LookupController, format: OutputFormat) -> anyhow::Result<String> {
    let view = render(controller);
    let output = match format {
        OutputFormat::Html => view.result.to_html(),
        OutputFormat::Json => match (&view.result, controller.current_result()) {
            (ResultView::Failed(card), _) => {
                serde_json::to_string_pretty(&serde_json::json!({ "error": card.message }))?
            }
            (_, Some(result)) => serde_json::to_string_pretty(result)?,
            _ => String::new(),
        },
        OutputFormat::Text => text(&view.result),
    };
    Ok(output)
}

fn text(result: &ResultView) -> String {
    let mut out = String::new();
    match result {
        ResultView::Empty => {}
        ResultView::Loading => out.push_str(tzl_core::view::LOADING_STATUS),
        ResultView::Found(card, _) => {
            let _ = writeln!(out, "Document Found for {}", card.city);
            let _ = writeln!(out, "  Document Link: {}", card.link);
            let _ = write!(out, "  File Type:     {}", card.file_type);
            if let Some(notes) = &card.notes {
                let _ = write!(out, "\n  Notes:         {}", notes);
            }
        }
        ResultView::Failed(card) => {
            let _ = writeln!(out, "{}", tzl_core::view::ERROR_TITLE);
            let _ = writeln!(out, "Error: {}", card.message);
            out.push_str("Suggestions:");
            for suggestion in card.suggestions {
                let _ = write!(out, "\n  - {}", suggestion);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tzl_core::lookup::interpret_response;

    fn completed(status: u16, body: &str) -> LookupController {
        let mut controller = LookupController::new();
        controller.set_input("Boston, MA");
        let ticket = controller.begin_submit().unwrap();
        controller.complete(&ticket, interpret_response(status, body));
        controller
    }

    #[test]
    fn test_text_found() {
        let controller = completed(200, r#"{"city":"Boston","link":"https://x/doc.pdf","notes":"Article 80"}"#);
        let out = render_output(&controller, OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "Document Found for Boston\n  Document Link: https://x/doc.pdf\n  File Type:     PDF\n  Notes:         Article 80"
        );
    }

    #[test]
    fn test_text_failed() {
        let controller = completed(404, r#"{"error":"City not found"}"#);
        let out = render_output(&controller, OutputFormat::Text).unwrap();
        assert!(out.contains("Error: City not found"));
        assert_eq!(out.matches("\n  - ").count(), 3);
    }

    #[test]
    fn test_json_outputs() {
        let controller = completed(200, r#"{"city":"Boston","link":"https://x/doc.pdf"}"#);
        let out = render_output(&controller, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["link"], "https://x/doc.pdf");
        assert!(value.get("file_type").is_none());

        let controller = completed(500, "{}");
        let out = render_output(&controller, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "An unknown error occurred");
    }

    #[test]
    fn test_html_is_escaped() {
        let controller = completed(200, r#"{"city":"Boston","link":"https://x/doc.pdf","notes":"<b>new</b>"}"#);
        let out = render_output(&controller, OutputFormat::Html).unwrap();
        assert!(out.contains("&lt;b&gt;new&lt;/b&gt;"));
    }
}
