//! `workitem.commented` → comment card
//!
//! Only comments that mention the configured reviewer are relayed.

use crate::domain::{CardHeader, ChatMessage, InboundEvent, Widget};
use crate::fields::Fields;

use super::links::{html_link, is_real_link, markdown_link, NO_LINK};
use super::project_name;

const COMMENTS_ICON: &str = "https://img.icons8.com/color/48/000000/comments.png";
const NO_COMMENT_TEXT: &str = "Could not retrieve comment text.";

pub(super) fn format(event: &InboundEvent, mention_tag: &str) -> Option<ChatMessage> {
    let root = Fields::new(event.payload());
    let resource = root.at(&["resource"]);
    let fields = resource.at(&["fields"]);

    let item_id = resource.text_or(&["id"], "N/A");
    let item_type = fields.text_or(&["System.WorkItemType"], "Work Item");
    let title = fields.text_or(&["System.Title"], "N/A");
    let commenter = fields.text_or(&["System.ChangedBy", "displayName"], "Unknown User");
    let revision = resource.text_or(&["rev"], "N/A");

    let comment = comment_text(&root);

    if !comment.contains(mention_tag) {
        tracing::info!(
            work_item_id = %item_id,
            mention = %mention_tag,
            "Mention not found in comment, skipping notification"
        );
        return None;
    }

    tracing::info!(
        work_item_id = %item_id,
        mention = %mention_tag,
        "Mention found in comment, formatting card"
    );

    let header = CardHeader::new(
        format!("New Comment on {item_type} #{item_id}"),
        format!("{title} | By: {commenter}"),
    )
    .with_icon(COMMENTS_ICON);

    let mut widgets = vec![
        Widget::text(format!("<b>Project:</b> {}", project_name(event))),
        Widget::text(format!("<b>Comment:</b>\n{comment}")),
    ];

    let link = work_item_link(&root);
    if is_real_link(&link) {
        widgets.push(Widget::link_button("View Work Item", link));
    }

    ChatMessage::new(format!("comment-wi-{item_id}-rev-{revision}"), header, widgets)
        .inspect_err(|e| tracing::error!(error = %e, "Discarding malformed comment card"))
        .ok()
}

/// Last non-empty line of `detailedMessage.text`, then `System.History`
pub(crate) fn comment_text(root: &Fields<'_>) -> String {
    root.text(&["detailedMessage", "text"])
        .and_then(|text| {
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .last()
                .map(str::to_string)
        })
        .or_else(|| root.text(&["resource", "fields", "System.History"]))
        .unwrap_or_else(|| NO_COMMENT_TEXT.to_string())
}

/// Markdown link, HTML anchor, `_links.html.href`, `url`, then `#`
pub(crate) fn work_item_link(root: &Fields<'_>) -> String {
    root.text(&["message", "markdown"])
        .and_then(|md| markdown_link(&md))
        .or_else(|| {
            root.text(&["message", "html"])
                .and_then(|html| html_link(&html))
        })
        .or_else(|| root.non_empty_text(&["resource", "_links", "html", "href"]))
        .or_else(|| root.non_empty_text(&["resource", "url"]))
        .unwrap_or_else(|| NO_LINK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comment_text_uses_last_detailed_line() {
        let payload = json!({
            "detailedMessage": {"text": "Ada commented on Bug 12\r\n\r\n  Please review @Francisco Aliss  \r\n"},
            "resource": {"fields": {"System.History": "history"}}
        });
        assert_eq!(
            comment_text(&Fields::new(&payload)),
            "Please review @Francisco Aliss"
        );
    }

    #[test]
    fn test_comment_text_falls_back_to_history() {
        let payload = json!({
            "detailedMessage": {"text": "\r\n  \r\n"},
            "resource": {"fields": {"System.History": "<div>LGTM</div>"}}
        });
        assert_eq!(comment_text(&Fields::new(&payload)), "<div>LGTM</div>");
    }

    #[test]
    fn test_comment_text_placeholder() {
        assert_eq!(comment_text(&Fields::new(&json!({}))), NO_COMMENT_TEXT);
    }

    #[test]
    fn test_link_precedence() {
        let both = json!({
            "message": {
                "markdown": "[Bug 12](https://md.example/12)",
                "html": "<a href=\"https://html.example/12\">Bug 12</a>"
            },
            "resource": {"_links": {"html": {"href": "https://links.example/12"}}, "url": "https://api.example/12"}
        });
        assert_eq!(work_item_link(&Fields::new(&both)), "https://md.example/12");

        let html_only = json!({
            "message": {"markdown": "no link", "html": "<a href=\"https://html.example/12?a=1&amp;b=2\">x</a>"}
        });
        assert_eq!(
            work_item_link(&Fields::new(&html_only)),
            "https://html.example/12?a=1&b=2"
        );

        let resource_links = json!({
            "resource": {"_links": {"html": {"href": "https://links.example/12"}}, "url": "https://api.example/12"}
        });
        assert_eq!(
            work_item_link(&Fields::new(&resource_links)),
            "https://links.example/12"
        );

        let url_only = json!({"resource": {"url": "https://api.example/12"}});
        assert_eq!(work_item_link(&Fields::new(&url_only)), "https://api.example/12");

        assert_eq!(work_item_link(&Fields::new(&json!({}))), "#");
    }
}
