//! `git.pullrequest.created` → pull request card

use crate::domain::{CardHeader, ChatMessage, InboundEvent, Widget};
use crate::fields::Fields;

use super::links::{is_real_link, NO_LINK};
use super::project_name;

const PULL_REQUEST_ICON: &str = "https://img.icons8.com/fluent/48/000000/pull-request.png";
const BRANCH_REF_PREFIX: &str = "refs/heads/";

pub(super) fn format(event: &InboundEvent) -> Option<ChatMessage> {
    tracing::info!("Processing pull request created event");

    let resource = Fields::new(event.payload()).at(&["resource"]);

    let repo_name = resource.text_or(&["repository", "name"], "N/A");
    let project = resource
        .text(&["repository", "project", "name"])
        .unwrap_or_else(|| project_name(event));

    let pr_id = resource.text_or(&["pullRequestId"], "N/A");
    let title = resource.text_or(&["title"], "N/A");
    let creator = resource.text_or(&["createdBy", "displayName"], "N/A");
    let source = branch_name(&resource.text_or(&["sourceRefName"], "N/A"));
    let target = branch_name(&resource.text_or(&["targetRefName"], "N/A"));

    let link = resource
        .non_empty_text(&["_links", "web", "href"])
        .or_else(|| resource.non_empty_text(&["url"]))
        .unwrap_or_else(|| NO_LINK.to_string());

    let header = CardHeader::new(
        format!("Pull Request #{pr_id} Created"),
        format!("Repo: {repo_name} | Project: {project}"),
    )
    .with_icon(PULL_REQUEST_ICON);

    let mut widgets = vec![
        Widget::labeled("Title", title),
        Widget::labeled("Created By", creator),
        Widget::labeled("Branches", format!("{source} → {target}")),
    ];

    if is_real_link(&link) {
        widgets.push(Widget::link_button("View Pull Request", link));
    }

    ChatMessage::new(format!("pr-{pr_id}"), header, widgets)
        .inspect_err(|e| tracing::error!(error = %e, "Discarding malformed pull request card"))
        .ok()
}

/// `refs/heads/main` → `main`
pub fn branch_name(ref_name: &str) -> String {
    ref_name
        .strip_prefix(BRANCH_REF_PREFIX)
        .unwrap_or(ref_name)
        .to_string()
}
