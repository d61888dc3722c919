//! crates/asado_match_core/src/seed.rs
//!
//! Static mock data: the candidate groups shown in the deck and the default
//! barbecue checklist.

use crate::domain::{image_url, AsadoItem, GroupProfile, ItemCategory, VibeStats};

pub fn candidate_groups() -> Vec<GroupProfile> {
    vec![
        GroupProfile {
            id: "1".to_string(),
            name: "Las Reinas de la Noche".to_string(),
            motto: "Si hay música, bailamos.".to_string(),
            member_count: 4,
            image_url: image_url(1),
            availability: "Viernes Noche".to_string(),
            location: "Rivero".to_string(),
            vibe: VibeStats::new(90.0, 40.0, 20.0),
        },
        GroupProfile {
            id: "2".to_string(),
            name: "Los Parrilleros del Sur".to_string(),
            motto: "El punto justo o nada.".to_string(),
            member_count: 3,
            image_url: image_url(2),
            availability: "Sábado Mediodía".to_string(),
            location: "La Viuda".to_string(),
            vibe: VibeStats::new(30.0, 95.0, 60.0),
        },
        GroupProfile {
            id: "3".to_string(),
            name: "Tranqui 120".to_string(),
            motto: "Guitarreada y vino frente al mar.".to_string(),
            member_count: 5,
            image_url: image_url(3),
            availability: "Domingo Atardecer".to_string(),
            location: "El Navío".to_string(),
            vibe: VibeStats::new(50.0, 60.0, 90.0),
        },
    ]
}

pub fn checklist_items() -> Vec<AsadoItem> {
    [
        (1, "Carbón / Leña", ItemCategory::Fire),
        (2, "Fósforos y Diario", ItemCategory::Fire),
        (3, "Tira de Asado", ItemCategory::Meat),
        (4, "Chorizos y Morcilla", ItemCategory::Meat),
        (5, "Pan flauta", ItemCategory::Other),
        (6, "Sal Parrillera", ItemCategory::Other),
        (7, "Fernet Branca", ItemCategory::Drink),
        (8, "Coca-Cola", ItemCategory::Drink),
        (9, "Hielo (2 bolsas)", ItemCategory::Drink),
    ]
    .into_iter()
    .map(|(id, name, category)| AsadoItem {
        id,
        name: name.to_string(),
        category,
        checked: false,
        assigned_to: None,
    })
    .collect()
}
