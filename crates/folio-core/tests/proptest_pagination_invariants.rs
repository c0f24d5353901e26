//! Property-based invariant tests for the pagination range calculator and
//! page state.
//!
//! These tests verify structural invariants that must hold for any inputs:
//!
//! 1. Small page counts list every page with no ellipsis.
//! 2. Page numbers are strictly increasing.
//! 3. The current page is always present and flagged.
//! 4. Output is deterministic.
//! 5. Boundary markers are disabled at the matching edge.
//! 6. A disabled bar disables every control.
//! 7. Window size stays bounded.
//! 8. Every ellipsis hides at least one page.
//! 9. Navigation markers frame the page list in a fixed order.
//! 10. Activating any control keeps the page state in range.

use folio_core::{
    ControlToken, Controls, PageState, PaginationConfig, compute, compute_controls,
    visible_window,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn config_strategy() -> impl Strategy<Value = PaginationConfig> {
    (0u64..=12, any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(max, first_last, prev_next, disabled)| {
            PaginationConfig::new()
                .max_visible_pages(max)
                .show_first_last(first_last)
                .show_prev_next(prev_next)
                .disabled(disabled)
        },
    )
}

fn input_strategy() -> impl Strategy<Value = (u64, u64, PaginationConfig)> {
    (1u64..=400)
        .prop_flat_map(|total| (0u64..=total + 5, Just(total), config_strategy()))
}

/// Inputs whose page count fits inside the window, so no ellipsis is needed.
fn fitting_input_strategy() -> impl Strategy<Value = (u64, u64, PaginationConfig)> {
    config_strategy().prop_flat_map(|config| {
        let max = config.normalized().max_visible_pages;
        (1u64..=max).prop_flat_map(move |total| (1u64..=total, Just(total), Just(config)))
    })
}

fn controls_for(current: u64, total: u64, config: &PaginationConfig) -> Controls {
    compute(current, total, config).expect("total is non-zero")
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Small page counts list every page
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn small_totals_list_every_page((current, total, config) in fitting_input_strategy()) {
        let controls = controls_for(current, total, &config);
        let expected: Vec<u64> = (1..=total).collect();
        prop_assert_eq!(controls.pages(), expected);
        prop_assert!(!controls.has_ellipsis());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Strictly increasing page numbers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pages_strictly_increasing((current, total, config) in input_strategy()) {
        let pages = controls_for(current, total, &config).pages();
        for pair in pages.windows(2) {
            prop_assert!(pair[0] < pair[1], "pages not increasing: {:?}", pages);
        }
        prop_assert_eq!(pages.first().copied(), Some(1));
        prop_assert_eq!(pages.last().copied(), Some(total));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Current page present
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn current_page_present((current, total, config) in input_strategy()) {
        let clamped = current.clamp(1, total);
        let controls = controls_for(current, total, &config);
        prop_assert!(controls.pages().contains(&clamped));
        let flagged: Vec<_> = controls.iter().filter(|c| c.current).collect();
        prop_assert_eq!(flagged.len(), 1);
        prop_assert_eq!(flagged[0].token, ControlToken::Page(clamped));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Deterministic output
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn deterministic((current, total, config) in input_strategy()) {
        prop_assert_eq!(
            controls_for(current, total, &config),
            controls_for(current, total, &config)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Boundary markers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn boundary_markers_disabled((current, total, config) in input_strategy()) {
        let clamped = current.clamp(1, total);
        let controls = controls_for(current, total, &config);
        for control in &controls {
            match control.token {
                ControlToken::Previous | ControlToken::First if clamped == 1 => {
                    prop_assert!(control.disabled);
                }
                ControlToken::Next | ControlToken::Last if clamped == total => {
                    prop_assert!(control.disabled);
                }
                token if token.is_navigation() => {
                    prop_assert_eq!(control.disabled, config.disabled);
                }
                _ => {}
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Disabled bar
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn disabled_bar_disables_all(
        (current, total, config) in input_strategy(),
    ) {
        let config = config.disabled(true);
        let controls = controls_for(current, total, &config);
        prop_assert!(controls.iter().all(|c| c.disabled));
        prop_assert!(controls.iter().all(|c| !c.is_interactive()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Bounded window
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn window_bounded((current, total, config) in input_strategy()) {
        let max = config.normalized().max_visible_pages;
        let (start, end) = visible_window(current, total, max);
        prop_assert!(start >= 1 && start <= end && end <= total);
        prop_assert_eq!(end - start + 1, max.min(total));

        let pages = controls_for(current, total, &config).pages();
        prop_assert!(pages.len() as u64 <= max.saturating_add(2));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Ellipsis hides at least one page
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ellipsis_hides_pages((current, total, config) in input_strategy()) {
        let controls = controls_for(current, total, &config);
        let items = controls.as_slice();
        for (idx, control) in items.iter().enumerate() {
            if control.token != ControlToken::Ellipsis {
                continue;
            }
            prop_assert!(control.disabled);
            let before = items[..idx].iter().rev().find_map(|c| c.token.page());
            let after = items[idx + 1..].iter().find_map(|c| c.token.page());
            match (before, after) {
                (Some(a), Some(b)) => {
                    prop_assert!(b - a >= 2, "empty gap {} … {}", a, b);
                }
                other => {
                    prop_assert!(false, "ellipsis not between pages: {:?}", other);
                }
            }
        }
        prop_assert!(controls.ellipsis_count() <= 2);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Marker order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn marker_order((current, total, config) in input_strategy()) {
        prop_assume!(total > 1);
        let controls = controls_for(current, total, &config);
        let mut leading = Vec::new();
        if config.show_prev_next {
            leading.push(ControlToken::Previous);
        }
        if config.show_first_last {
            leading.push(ControlToken::First);
        }
        let mut trailing = Vec::new();
        if config.show_first_last {
            trailing.push(ControlToken::Last);
        }
        if config.show_prev_next {
            trailing.push(ControlToken::Next);
        }

        let tokens: Vec<ControlToken> = controls.iter().map(|c| c.token).collect();
        prop_assert_eq!(&tokens[..leading.len()], leading.as_slice());
        prop_assert_eq!(&tokens[tokens.len() - trailing.len()..], trailing.as_slice());
        let inner = &tokens[leading.len()..tokens.len() - trailing.len()];
        prop_assert!(inner.iter().all(|t| !t.is_navigation()));
    }

    #[test]
    fn single_page_is_bare(config in config_strategy(), current in 0u64..5) {
        let controls = controls_for(current, 1, &config);
        prop_assert_eq!(controls.len(), 1);
        prop_assert_eq!(controls[0].token, ControlToken::Page(1));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Activation keeps state valid
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn activation_stays_in_range(
        (current, total, config) in input_strategy(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..20),
    ) {
        let mut state = PageState::new(current, total).expect("total is non-zero");
        for pick in picks {
            let controls = compute_controls(state, &config);
            let control = controls[pick.index(controls.len())];
            let before = state.current();
            let target = state.target_of(&control);
            let change = state.activate(&control);

            prop_assert!(state.current() >= 1 && state.current() <= state.total());
            match change {
                Some(change) => {
                    prop_assert_eq!(change.from, before);
                    prop_assert_eq!(Some(change.to), target);
                    prop_assert!(control.is_interactive());
                }
                None => prop_assert_eq!(state.current(), before),
            }
        }
    }

    #[test]
    fn item_ranges_tile(total_items in 0u64..5_000, per_page in 1u64..200) {
        let mut state = PageState::from_item_count(total_items, per_page).expect("per_page > 0");
        let mut covered = 0u64;
        loop {
            let range = state.item_range_within(per_page, total_items);
            prop_assert_eq!(range.start, covered);
            covered = range.end;
            if state.next().is_none() {
                break;
            }
        }
        prop_assert_eq!(covered, total_items);
    }
}
