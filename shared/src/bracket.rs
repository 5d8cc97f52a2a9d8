use crate::dto::event::BoutDto;

/// Bouts of one weight class on a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Bracket {
    pub weight_class: String,
    pub bouts: Vec<BoutDto>,
    pub has_title_fight: bool,
}

/// Groups a card into brackets. Weight classes keep the order in which they first
/// appear on the card; bouts inside a bracket are ordered by card position.
pub fn group_into_brackets(bouts: &[BoutDto]) -> Vec<Bracket> {
    let mut brackets = bouts.iter().fold(Vec::<Bracket>::new(), |mut acc, bout| {
        match acc.iter_mut().find(|b| b.weight_class == bout.weight_class) {
            Some(bracket) => {
                bracket.has_title_fight |= bout.title_fight;
                bracket.bouts.push(bout.clone());
            }
            None => acc.push(Bracket {
                weight_class: bout.weight_class.clone(),
                bouts: vec![bout.clone()],
                has_title_fight: bout.title_fight,
            }),
        }
        acc
    });
    for bracket in &mut brackets {
        bracket.bouts.sort_by_key(|b| b.card_position);
    }
    brackets
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bout(id: &str, class: &str, position: u32, title: bool) -> BoutDto {
        BoutDto {
            id: id.into(),
            red_corner: format!("{}-red", id),
            blue_corner: format!("{}-blue", id),
            weight_class: class.into(),
            card_position: position,
            title_fight: title,
        }
    }

    #[test]
    fn test_grouping_preserves_first_appearance() {
        let card = vec![
            bout("a", "Lightweight", 4, false),
            bout("b", "Heavyweight", 1, true),
            bout("c", "Lightweight", 2, false),
            bout("d", "Lightweight", 2, false),
        ];
        let brackets = group_into_brackets(&card);
        let classes: Vec<_> = brackets.iter().map(|b| b.weight_class.as_str()).collect();
        assert_eq!(classes, vec!["Lightweight", "Heavyweight"]);

        let light: Vec<_> = brackets[0].bouts.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(light, vec!["c", "d", "a"]);
        assert!(!brackets[0].has_title_fight);
        assert!(brackets[1].has_title_fight);
    }

    #[test]
    fn test_empty_card() {
        assert!(group_into_brackets(&[]).is_empty());
    }
}
