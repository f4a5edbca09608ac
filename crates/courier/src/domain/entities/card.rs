//! ChatMessage - Google Chat Cards V2 message
//!
//! Serializes to the shape the Google Chat incoming webhook expects:
//!
//! ```json
//! {"cardsV2": [{"cardId": "...", "card": {"header": {...}, "sections": [{"widgets": [...]}]}}]}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// A complete chat message carrying exactly one card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub cards_v2: Vec<CardEnvelope>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEnvelope {
    pub card_id: String,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub header: CardHeader,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHeader {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageType {
    Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub widgets: Vec<Widget>,
}

/// Card widgets used by the relay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Widget {
    TextParagraph(TextParagraph),
    DecoratedText(DecoratedText),
    ButtonList(ButtonList),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextParagraph {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedText {
    pub top_label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonList {
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub text: String,
    pub on_click: OnClick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnClick {
    pub open_link: OpenLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenLink {
    pub url: String,
}

impl ChatMessage {
    /// Build a single-card message
    ///
    /// Rejects an empty widget list so a header-only card is never sent.
    pub fn new(
        card_id: impl Into<String>,
        header: CardHeader,
        widgets: Vec<Widget>,
    ) -> Result<Self, DomainError> {
        let card_id = card_id.into();
        if widgets.is_empty() {
            return Err(DomainError::Validation(format!(
                "card {card_id} has no widgets"
            )));
        }

        Ok(Self {
            cards_v2: vec![CardEnvelope {
                card_id,
                card: Card {
                    header,
                    sections: vec![Section { widgets }],
                },
            }],
        })
    }

    /// Identifier of the first card
    pub fn card_id(&self) -> Option<&str> {
        self.cards_v2.first().map(|c| c.card_id.as_str())
    }

    pub fn header(&self) -> Option<&CardHeader> {
        self.cards_v2.first().map(|c| &c.card.header)
    }

    /// All widgets of the first card, in order
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.cards_v2
            .iter()
            .take(1)
            .flat_map(|c| c.card.sections.iter())
            .flat_map(|s| s.widgets.iter())
    }
}

impl CardHeader {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            image_url: None,
            image_type: None,
        }
    }

    /// Attach a circular header icon
    pub fn with_icon(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self.image_type = Some(ImageType::Circle);
        self
    }
}

impl Widget {
    pub fn text(text: impl Into<String>) -> Self {
        Self::TextParagraph(TextParagraph { text: text.into() })
    }

    pub fn labeled(top_label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::DecoratedText(DecoratedText {
            top_label: top_label.into(),
            text: text.into(),
        })
    }

    /// A button list holding a single link button
    pub fn link_button(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ButtonList(ButtonList {
            buttons: vec![Button {
                text: text.into(),
                on_click: OnClick {
                    open_link: OpenLink { url: url.into() },
                },
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_serializes_cards_v2_shape() {
        let message = ChatMessage::new(
            "pr-7",
            CardHeader::new("Title", "Sub").with_icon("https://example.com/i.png"),
            vec![
                Widget::text("<b>Project:</b> Apollo"),
                Widget::labeled("Created By", "Ada"),
                Widget::link_button("Open", "https://example.com"),
            ],
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "cardsV2": [{
                    "cardId": "pr-7",
                    "card": {
                        "header": {
                            "title": "Title",
                            "subtitle": "Sub",
                            "imageUrl": "https://example.com/i.png",
                            "imageType": "CIRCLE"
                        },
                        "sections": [{
                            "widgets": [
                                {"textParagraph": {"text": "<b>Project:</b> Apollo"}},
                                {"decoratedText": {"topLabel": "Created By", "text": "Ada"}},
                                {"buttonList": {"buttons": [{
                                    "text": "Open",
                                    "onClick": {"openLink": {"url": "https://example.com"}}
                                }]}}
                            ]
                        }]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_header_without_icon_omits_image_fields() {
        let value = serde_json::to_value(CardHeader::new("T", "S")).unwrap();
        assert_eq!(value, json!({"title": "T", "subtitle": "S"}));
    }

    #[test]
    fn test_rejects_card_without_widgets() {
        let result = ChatMessage::new("empty", CardHeader::new("T", "S"), vec![]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
