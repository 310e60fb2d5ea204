use crate::core::catalog::Catalog;
use crate::domain::model::{Character, Element, Team, Theme, MAX_RARITY};
use std::fmt::Write;

const RESET: &str = "\x1b[0m";

fn element_color(element: Option<Element>, theme: Theme) -> &'static str {
    // Dark backgrounds get the bright variants.
    match (element, theme) {
        (Some(Element::Pyro), Theme::Light) => "\x1b[31m",
        (Some(Element::Pyro), Theme::Dark) => "\x1b[91m",
        (Some(Element::Hydro), Theme::Light) => "\x1b[34m",
        (Some(Element::Hydro), Theme::Dark) => "\x1b[94m",
        (Some(Element::Anemo), Theme::Light) => "\x1b[36m",
        (Some(Element::Anemo), Theme::Dark) => "\x1b[96m",
        (Some(Element::Electro), Theme::Light) => "\x1b[35m",
        (Some(Element::Electro), Theme::Dark) => "\x1b[95m",
        (Some(Element::Dendro), Theme::Light) => "\x1b[32m",
        (Some(Element::Dendro), Theme::Dark) => "\x1b[92m",
        (Some(Element::Cryo), Theme::Light) => "\x1b[36;2m",
        (Some(Element::Cryo), Theme::Dark) => "\x1b[97m",
        (Some(Element::Geo), Theme::Light) => "\x1b[33m",
        (Some(Element::Geo), Theme::Dark) => "\x1b[93m",
        (None, Theme::Light) => "\x1b[30m",
        (None, Theme::Dark) => "\x1b[37m",
    }
}

/// Imported rarities are not range-checked, so cap what gets drawn.
fn stars(character: &Character) -> String {
    let rarity = character.rarity.unwrap_or(0).min(MAX_RARITY);
    "★".repeat(rarity as usize)
}

fn character_line(character: &Character, theme: Theme) -> String {
    format!(
        "{}{:>3}  {:<16}{} {:<8} {:<9} {}",
        element_color(character.element_kind(), theme),
        character.id,
        character.name,
        RESET,
        character.element,
        character.weapon,
        stars(character)
    )
}

/// The team followed by one placeholder per open slot.
pub fn render_team(team: &Team, theme: Theme) -> String {
    let mut out = String::from("Your team\n");
    if team.is_empty() {
        out.push_str("  Select characters to build your team\n");
    }
    for character in team {
        let _ = writeln!(out, "  {}", character_line(character, theme));
    }
    for _ in 0..team.open_slots() {
        out.push_str("  [ empty ]\n");
    }
    out
}

/// Every catalog entry, marking the ones already in the team.
pub fn render_catalog(catalog: &Catalog, team: &Team, theme: Theme) -> String {
    let mut out = String::from("Available characters\n");
    for character in catalog.characters() {
        let marker = if team.contains(character.id) { '*' } else { ' ' };
        let _ = writeln!(out, "{} {}", marker, character_line(character, theme));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_team_shows_four_slots() {
        let rendered = render_team(&Team::new(), Theme::Light);
        assert!(rendered.contains("Select characters"));
        assert_eq!(rendered.matches("[ empty ]").count(), 4);
    }

    #[test]
    fn test_oversized_rarity_is_capped() {
        let mut team = Team::new();
        team.toggle(&Character {
            id: 1,
            name: "Amber".to_string(),
            element: "Pyro".to_string(),
            weapon: "Bow".to_string(),
            image: "/a.png".to_string(),
            rarity: Some(200),
        });

        let rendered = render_team(&team, Theme::Light);
        assert_eq!(rendered.matches('★').count(), MAX_RARITY as usize);
    }

    #[test]
    fn test_catalog_marks_selected() {
        let catalog = Catalog::builtin().unwrap();
        let mut team = Team::new();
        team.toggle(catalog.lookup(4).unwrap());

        let rendered = render_catalog(&catalog, &team, Theme::Dark);
        let bennett = rendered.lines().find(|l| l.contains("Bennett")).unwrap();
        assert!(bennett.starts_with('*'));
        let amber = rendered.lines().find(|l| l.contains("Amber")).unwrap();
        assert!(amber.starts_with(' '));
    }

    #[test]
    fn test_team_lists_members_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let mut team = Team::new();
        team.toggle(catalog.lookup(9).unwrap());
        team.toggle(catalog.lookup(1).unwrap());

        let rendered = render_team(&team, Theme::Light);
        let diluc = rendered.find("Diluc").unwrap();
        let amber = rendered.find("Amber").unwrap();
        assert!(diluc < amber);
        assert_eq!(rendered.matches("[ empty ]").count(), 2);
    }
}
