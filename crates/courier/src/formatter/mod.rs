//! Event Formatter
//!
//! Turns a service hook event into a Google Chat card, or `None` when the
//! event does not warrant a notification. Formatting never fails: missing
//! fields degrade to placeholders.

pub mod links;
mod pull_request;
mod work_item;

pub use pull_request::branch_name;

use crate::config::RelayConfig;
use crate::domain::{ChatMessage, EventKind, InboundEvent};
use crate::fields::Fields;

const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Formats events using the configured comment mention
#[derive(Debug, Clone)]
pub struct EventFormatter {
    mention_tag: String,
}

impl EventFormatter {
    pub fn new(mention_tag: impl Into<String>) -> Self {
        Self {
            mention_tag: mention_tag.into(),
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(config.mention_tag.clone())
    }

    pub fn mention_tag(&self) -> &str {
        &self.mention_tag
    }

    /// Format an event, or `None` if no notification is warranted
    pub fn format(&self, event: &InboundEvent) -> Option<ChatMessage> {
        match event.kind() {
            EventKind::WorkItemCommented => work_item::format(event, &self.mention_tag),
            EventKind::PullRequestCreated => pull_request::format(event),
            EventKind::Other(event_type) => {
                tracing::info!(
                    event_type = %event_type,
                    "Event type not configured for notification, skipping"
                );
                None
            }
        }
    }
}

/// `System.TeamProject`, then `resourceContainers.project.name`
pub fn project_name(event: &InboundEvent) -> String {
    let root = Fields::new(event.payload());
    root.non_empty_text(&["resource", "fields", "System.TeamProject"])
        .or_else(|| root.non_empty_text(&["resourceContainers", "project", "name"]))
        .unwrap_or_else(|| UNKNOWN_PROJECT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Widget;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn formatter() -> EventFormatter {
        EventFormatter::new("@Francisco Aliss")
    }

    fn comment_event(comment: &str) -> InboundEvent {
        InboundEvent::new(json!({
            "id": "b0a3c8f2",
            "eventType": "workitem.commented",
            "message": {
                "text": "Ada Lovelace commented on Bug 5",
                "html": "<a href=\"https://dev.azure.com/contoso/web/_workitems/edit/5?a=1&amp;b=2\">Bug 5</a> commented",
                "markdown": "[Bug 5](https://dev.azure.com/contoso/web/_workitems/edit/5) commented"
            },
            "detailedMessage": {
                "text": format!("Ada Lovelace commented on Bug 5\r\n\r\n{comment}\r\n")
            },
            "resource": {
                "id": 5,
                "rev": 7,
                "fields": {
                    "System.TeamProject": "Fabrikam-Fiber",
                    "System.WorkItemType": "Bug",
                    "System.Title": "Login page crashes",
                    "System.ChangedBy": {"displayName": "Ada Lovelace"},
                    "System.History": comment
                },
                "url": "https://dev.azure.com/contoso/_apis/wit/workItems/5"
            }
        }))
    }

    fn pr_event() -> InboundEvent {
        InboundEvent::new(json!({
            "eventType": "git.pullrequest.created",
            "resource": {
                "repository": {
                    "name": "Fabrikam",
                    "project": {"name": "Fabrikam-Fiber-Git"}
                },
                "pullRequestId": 1,
                "title": "my first pull request",
                "createdBy": {"displayName": "Jamal Hartnett"},
                "sourceRefName": "refs/heads/mytopic",
                "targetRefName": "refs/heads/main",
                "url": "https://dev.azure.com/contoso/_apis/git/repositories/x/pullRequests/1",
                "_links": {"web": {"href": "https://dev.azure.com/contoso/_git/Fabrikam/pullrequest/1"}}
            },
            "resourceContainers": {"project": {"name": "Container Project"}}
        }))
    }

    #[test]
    fn test_comment_with_mention_is_formatted() {
        let message = formatter()
            .format(&comment_event("Please review @Francisco Aliss"))
            .expect("mention should produce a card");

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "cardsV2": [{
                    "cardId": "comment-wi-5-rev-7",
                    "card": {
                        "header": {
                            "title": "New Comment on Bug #5",
                            "subtitle": "Login page crashes | By: Ada Lovelace",
                            "imageUrl": "https://img.icons8.com/color/48/000000/comments.png",
                            "imageType": "CIRCLE"
                        },
                        "sections": [{
                            "widgets": [
                                {"textParagraph": {"text": "<b>Project:</b> Fabrikam-Fiber"}},
                                {"textParagraph": {"text": "<b>Comment:</b>\nPlease review @Francisco Aliss"}},
                                {"buttonList": {"buttons": [{
                                    "text": "View Work Item",
                                    "onClick": {"openLink": {"url": "https://dev.azure.com/contoso/web/_workitems/edit/5"}}
                                }]}}
                            ]
                        }]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_comment_without_mention_is_skipped() {
        assert!(formatter().format(&comment_event("Please review")).is_none());
    }

    #[test]
    fn test_mention_is_case_sensitive() {
        assert!(formatter()
            .format(&comment_event("Please review @francisco aliss"))
            .is_none());
    }

    #[test]
    fn test_custom_mention() {
        let formatter = EventFormatter::new("@Grace Hopper");
        assert!(formatter.format(&comment_event("cc @Grace Hopper")).is_some());
        assert!(formatter
            .format(&comment_event("cc @Francisco Aliss"))
            .is_none());
    }

    #[test]
    fn test_comment_without_link_has_no_button() {
        let event = InboundEvent::new(json!({
            "eventType": "workitem.commented",
            "detailedMessage": {"text": "@Francisco Aliss ping"}
        }));
        let message = formatter().format(&event).expect("mention present");

        let header = message.header().unwrap();
        assert_eq!(header.title, "New Comment on Work Item #N/A");
        assert_eq!(header.subtitle, "N/A | By: Unknown User");
        assert_eq!(message.card_id(), Some("comment-wi-N/A-rev-N/A"));

        let widgets: Vec<&Widget> = message.widgets().collect();
        assert_eq!(widgets.len(), 2);
        assert_eq!(widgets[0], &Widget::text("<b>Project:</b> Unknown Project"));
    }

    #[test]
    fn test_pull_request_is_always_formatted() {
        let message = formatter().format(&pr_event()).expect("PRs are not gated");

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "cardsV2": [{
                    "cardId": "pr-1",
                    "card": {
                        "header": {
                            "title": "Pull Request #1 Created",
                            "subtitle": "Repo: Fabrikam | Project: Fabrikam-Fiber-Git",
                            "imageUrl": "https://img.icons8.com/fluent/48/000000/pull-request.png",
                            "imageType": "CIRCLE"
                        },
                        "sections": [{
                            "widgets": [
                                {"decoratedText": {"topLabel": "Title", "text": "my first pull request"}},
                                {"decoratedText": {"topLabel": "Created By", "text": "Jamal Hartnett"}},
                                {"decoratedText": {"topLabel": "Branches", "text": "mytopic → main"}},
                                {"buttonList": {"buttons": [{
                                    "text": "View Pull Request",
                                    "onClick": {"openLink": {"url": "https://dev.azure.com/contoso/_git/Fabrikam/pullrequest/1"}}
                                }]}}
                            ]
                        }]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_pull_request_project_falls_back_to_container() {
        let event = InboundEvent::new(json!({
            "eventType": "git.pullrequest.created",
            "resource": {"repository": {"name": "Fabrikam"}, "pullRequestId": 9},
            "resourceContainers": {"project": {"name": "Container Project"}}
        }));
        let message = formatter().format(&event).unwrap();
        assert_eq!(
            message.header().unwrap().subtitle,
            "Repo: Fabrikam | Project: Container Project"
        );
    }

    #[test]
    fn test_empty_pull_request_uses_placeholders() {
        let event = InboundEvent::new(json!({"eventType": "git.pullrequest.created"}));
        let message = formatter().format(&event).unwrap();

        assert_eq!(message.card_id(), Some("pr-N/A"));
        let widgets: Vec<&Widget> = message.widgets().collect();
        assert_eq!(
            widgets,
            vec![
                &Widget::labeled("Title", "N/A"),
                &Widget::labeled("Created By", "N/A"),
                &Widget::labeled("Branches", "N/A → N/A"),
            ]
        );
    }

    #[test]
    fn test_pull_request_link_falls_back_to_url() {
        let event = InboundEvent::new(json!({
            "eventType": "git.pullrequest.created",
            "resource": {"pullRequestId": 3, "url": "https://api.example/pr/3"}
        }));
        let message = formatter().format(&event).unwrap();
        assert_eq!(
            message.widgets().last(),
            Some(&Widget::link_button("View Pull Request", "https://api.example/pr/3"))
        );
    }

    #[test]
    fn test_unrecognized_events_are_skipped() {
        for payload in [
            json!({"eventType": "build.complete"}),
            json!({"eventType": "workitem.updated", "resource": {"id": 1}}),
            json!({}),
            json!(null),
            json!("workitem.commented"),
        ] {
            assert!(formatter().format(&InboundEvent::new(payload)).is_none());
        }
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let event = comment_event("Please review @Francisco Aliss");
        let first = serde_json::to_vec(&formatter().format(&event)).unwrap();
        let second = serde_json::to_vec(&formatter().format(&event)).unwrap();
        assert_eq!(first, second);

        let pr = pr_event();
        assert_eq!(
            serde_json::to_vec(&formatter().format(&pr)).unwrap(),
            serde_json::to_vec(&formatter().format(&pr)).unwrap()
        );
    }

    #[test]
    fn test_project_name_resolution() {
        let from_fields = InboundEvent::new(json!({
            "resource": {"fields": {"System.TeamProject": "A"}},
            "resourceContainers": {"project": {"name": "B"}}
        }));
        assert_eq!(project_name(&from_fields), "A");

        let from_container = InboundEvent::new(json!({
            "resource": {"fields": {"System.TeamProject": ""}},
            "resourceContainers": {"project": {"name": "B"}}
        }));
        assert_eq!(project_name(&from_container), "B");

        assert_eq!(project_name(&InboundEvent::new(Value::Null)), "Unknown Project");
    }
}
