//! Read-only projections of the session model used by the screens

use crate::models::ServiceRecord;
use crate::state::{Counters, SessionState};

/// Everything a card needs to draw itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub service: &'static ServiceRecord,
    pub liked: bool,
}

/// Top bar counters plus whether a call is currently affordable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountersView {
    pub likes: u32,
    pub coins: u32,
    pub copies: u32,
    pub can_call: bool,
}

impl From<&SessionState> for CountersView {
    fn from(session: &SessionState) -> Self {
        let Counters { likes, coins, copies } = session.counters();
        Self {
            likes,
            coins,
            copies,
            can_call: session.can_afford_call(),
        }
    }
}

/// One card per catalog entry, in catalog order
pub fn card_views(catalog: &'static [ServiceRecord], session: &SessionState) -> Vec<CardView> {
    catalog
        .iter()
        .map(|service| CardView {
            service,
            liked: session.is_liked(service.id),
        })
        .collect()
}

/// Split available width into card columns and left padding to centre the grid
pub fn grid_layout(available_width: f32, card_width: f32, spacing: f32) -> (usize, f32) {
    let columns = ((available_width + spacing) / (card_width + spacing)).floor().max(1.0) as usize;
    let used = columns as f32 * card_width + (columns.saturating_sub(1)) as f32 * spacing;
    let padding = ((available_width - used) / 2.0).max(0.0);
    (columns, padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::SERVICES;

    #[test]
    fn test_cards_cover_whole_catalog_in_order() {
        let session = SessionState::default();
        let cards = card_views(SERVICES, &session);
        assert_eq!(cards.len(), SERVICES.len());
        let ids: Vec<u32> = cards.iter().map(|c| c.service.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        assert!(cards.iter().all(|c| !c.liked));
    }

    #[test]
    fn test_liked_flag_follows_session() {
        let mut session = SessionState::default();
        session.like(3).unwrap();
        let cards = card_views(SERVICES, &session);
        let liked: Vec<u32> = cards.iter().filter(|c| c.liked).map(|c| c.service.id).collect();
        assert_eq!(liked, vec![3]);
    }

    #[test]
    fn test_projection_is_repeatable() {
        let mut session = SessionState::default();
        session.like(1).unwrap();
        assert_eq!(card_views(SERVICES, &session), card_views(SERVICES, &session));
    }

    #[test]
    fn test_counters_view_tracks_affordability() {
        let session = SessionState::new(19, None);
        let view = CountersView::from(&session);
        assert_eq!(view.coins, 19);
        assert!(!view.can_call);
        assert!(CountersView::from(&SessionState::new(20, None)).can_call);
    }

    #[test]
    fn test_grid_layout() {
        assert_eq!(grid_layout(100.0, 260.0, 16.0), (1, 0.0));
        let (columns, padding) = grid_layout(900.0, 260.0, 16.0);
        assert_eq!(columns, 3);
        assert!((padding - 44.0).abs() < f32::EPSILON);
    }
}
