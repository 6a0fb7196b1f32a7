use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::validation::filled;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "mensagem")]
    pub body: String,
}

/// A validated name/body pair, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub body: String,
}

/// Body of `POST /` and `PUT /api/mensagens/{id}`. Fields are optional so a
/// missing one is reported by the handler instead of the JSON extractor.
#[derive(Debug, Default, Deserialize)]
pub struct MessagePayload {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "mensagem")]
    pub body: Option<String>,
}

impl MessagePayload {
    pub fn validate(&self) -> Option<NewMessage> {
        Some(NewMessage {
            name: filled(self.name.as_deref())?,
            body: filled(self.body.as_deref())?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GridQuery {
    pub nome: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_with_both_fields_is_trimmed() {
        let payload: MessagePayload =
            serde_json::from_str(r#"{"nome": "  Aviso ", "mensagem": "Reunião às 10h\n"}"#).unwrap();
        assert_eq!(
            payload.validate(),
            Some(NewMessage {
                name: "Aviso".to_string(),
                body: "Reunião às 10h".to_string(),
            })
        );
    }

    #[test]
    fn payload_missing_or_blank_field_is_invalid() {
        let missing: MessagePayload = serde_json::from_str(r#"{"nome": "Aviso"}"#).unwrap();
        assert!(missing.validate().is_none());

        let blank: MessagePayload =
            serde_json::from_str(r#"{"nome": "   ", "mensagem": "texto"}"#).unwrap();
        assert!(blank.validate().is_none());

        let null: MessagePayload =
            serde_json::from_str(r#"{"nome": null, "mensagem": "texto"}"#).unwrap();
        assert!(null.validate().is_none());
    }

    #[test]
    fn message_serializes_with_wire_names() {
        let message = Message {
            id: 7,
            name: "Aviso".to_string(),
            body: "texto".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({ "id": 7, "nome": "Aviso", "mensagem": "texto" })
        );
    }
}
