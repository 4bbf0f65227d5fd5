use super::prelude::*;
use hotelfinder_entities::builders::*;

pub fn hotels(names: &[&str]) -> Vec<Hotel> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Hotel::build()
                .id(&i.to_string())
                .name(name)
                .location("City", "Country")
                .finish()
        })
        .collect()
}
