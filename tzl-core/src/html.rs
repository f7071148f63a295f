//! Static HTML fragments for the result region.
//!
//! Every value that came from the server or the user passes through [`escape_html`].
//! Interactive controls are left out; the fragments are for embedding and export.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::view::{
    DocumentCard, ErrorCard, ResultView, VerificationPanel, ERROR_TITLE, LOADING_DETAIL,
    LOADING_STATUS,
};

impl ResultView {
    pub fn to_html(&self) -> String {
        match self {
            ResultView::Empty => String::new(),
            ResultView::Loading => loading_html(),
            ResultView::Found(card, panel) => {
                let mut html = card.to_html();
                html.push_str(&panel.to_html());
                html
            }
            ResultView::Failed(card) => card.to_html(),
        }
    }
}

fn loading_html() -> String {
    format!(
        "<div class=\"result-card loading\">\
         <div class=\"status-indicator loading\"><span class=\"spinner\"></span>{}</div>\
         <p class=\"mt-4\">{}</p>\
         </div>",
        LOADING_STATUS, LOADING_DETAIL
    )
}

fn result_item(html: &mut String, label: &str, value_html: &str) {
    let _ = write!(
        html,
        "<div class=\"result-item\"><div class=\"result-label\">{}</div>\
         <div class=\"result-value\">{}</div></div>",
        label, value_html
    );
}

impl DocumentCard {
    pub fn to_html(&self) -> String {
        let mut html = String::from(
            "<div class=\"result-card success\">\
             <div class=\"status-indicator success\">✓ Zoning Ordinance Found</div>",
        );
        let _ = write!(
            html,
            "<h3 class=\"result-title\">Document Found for {}</h3>",
            escape_html(&self.city)
        );

        let link = escape_html(&self.link);
        result_item(
            &mut html,
            "Document Link",
            &format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"result-link\">{}</a>",
                link, link
            ),
        );
        result_item(&mut html, "File Type", &escape_html(&self.file_type));
        if let Some(notes) = &self.notes {
            result_item(&mut html, "Notes", &escape_html(notes));
        }

        html.push_str("</div>");
        html
    }
}

impl VerificationPanel {
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"pdf-preview\"><h3>Verify This Document</h3>");
        let _ = write!(html, "<p>{}</p>", escape_html(&self.prompt()));
        if let Some(notice) = self.notice {
            let class = if notice.offers_search_again() { "error" } else { "success" };
            let _ = write!(
                html,
                "<div class=\"mt-4\"><div class=\"status-indicator {}\">{}</div>\
                 <p class=\"mt-4\">{}</p></div>",
                class,
                notice.status(),
                escape_html(notice.message())
            );
        }
        html.push_str("</div>");
        html
    }
}

impl ErrorCard {
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<div class=\"result-card error\">\
             <div class=\"status-indicator error\">✗ Error</div>\
             <h3 class=\"result-title\">{}</h3>\
             <p><strong>Error:</strong> {}</p>\
             <div class=\"mt-4\"><p><strong>Suggestions:</strong></p><ul>",
            ERROR_TITLE,
            escape_html(&self.message)
        );
        for suggestion in self.suggestions {
            let _ = write!(html, "<li>{}</li>", escape_html(suggestion));
        }
        html.push_str("</ul></div></div>");
        html
    }
}
