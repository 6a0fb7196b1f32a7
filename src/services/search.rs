use crate::databases::messages::message::Message;

/// Keeps the messages whose name contains `term`, ignoring case. A blank term
/// keeps everything.
pub fn filter_by_name(messages: Vec<Message>, term: &str) -> Vec<Message> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|m| m.name.to_lowercase().contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: i64, name: &str) -> Message {
        Message {
            id,
            name: name.to_string(),
            body: format!("corpo {}", id),
        }
    }

    fn sample() -> Vec<Message> {
        vec![
            message(1, "Boas-vindas"),
            message(2, "Aviso de manutenção"),
            message(3, "AVISO urgente"),
            message(4, "Ção"),
        ]
    }

    #[test]
    fn blank_term_keeps_everything() {
        assert_eq!(filter_by_name(sample(), "").len(), 4);
        assert_eq!(filter_by_name(sample(), "   ").len(), 4);
    }

    #[test]
    fn match_ignores_case_and_keeps_order() {
        let ids: Vec<i64> = filter_by_name(sample(), "aviso").iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn match_lowercases_non_ascii() {
        let ids: Vec<i64> = filter_by_name(sample(), "çÃO").iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn no_match_gives_empty_list() {
        assert!(filter_by_name(sample(), "inexistente").is_empty());
    }
}
