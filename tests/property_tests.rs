//! Property-based tests for the catalog pipeline and the reducer.
//!
//! Tests validate:
//! 1. Filtering yields an order-preserving subsequence of its input
//! 2. Predicate application order does not change the result
//! 3. Sorting is a stable permutation in both directions
//! 4. Unsorted state is the identity
//! 5. ResetAll returns the default state from anywhere
//! 6. The tri-state sort cycle
//! 7. String collation is antisymmetric and ranks base letters before accents

use prodcat::catalog::{
    collate, compare_by, derive, filter, join, matches_categories, matches_owner, matches_search,
    sort, Catalog,
};
use prodcat::model::{
    Category, CategoryId, EnrichedProduct, Product, ProductId, RawCatalog, Sex, SortKey, User,
    UserId,
};
use prodcat::state::{reduce, Action, FilterState, SortDirection, SortState, ViewState};
use proptest::prelude::*;
use std::cmp::Ordering;

// ===== Strategies =====

const USERS: u32 = 3;
const CATEGORIES: u32 = 4;

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

/// Short names from a tiny alphabet so duplicates, case-only and
/// accent-only differences are common. Punctuation and digits mix in too.
fn name() -> impl Strategy<Value = String> {
    "[aAáÁbBeéÉ~7 -]{0,3}"
}

/// Puts an accent on every vowel that has a common precomposed form.
fn accented(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'a' => 'á',
            'e' => 'é',
            'i' => 'í',
            'o' => 'ö',
            'u' => 'ü',
            other => other,
        })
        .collect()
}

/// A catalog whose references always resolve. Product ids follow input
/// order, so "input order" is ascending id.
fn catalog() -> impl Strategy<Value = Catalog> {
    let owners = prop::collection::vec(1..=USERS, CATEGORIES as usize);
    let user_names = prop::collection::vec(name(), USERS as usize);
    let category_titles = prop::collection::vec(name(), CATEGORIES as usize);
    let products = prop::collection::vec((name(), 1..=CATEGORIES), 0..24);

    (owners, user_names, category_titles, products).prop_map(
        |(owners, user_names, titles, products)| {
            let users = user_names
                .into_iter()
                .zip(1..)
                .map(|(name, id)| User {
                    id: UserId::new(id),
                    name,
                    sex: if id % 2 == 0 { Sex::Female } else { Sex::Male },
                })
                .collect();
            let categories = titles
                .into_iter()
                .zip(owners)
                .zip(1..)
                .map(|((title, owner), id)| Category {
                    id: CategoryId::new(id),
                    title,
                    icon: "*".to_string(),
                    owner_id: UserId::new(owner),
                })
                .collect();
            let products = products
                .into_iter()
                .zip(1..)
                .map(|((name, category), id)| Product {
                    id: ProductId::new(id),
                    name,
                    category_id: CategoryId::new(category),
                })
                .collect();

            join(RawCatalog {
                users,
                categories,
                products,
            })
            .expect("generated references always resolve")
        },
    )
}

fn filter_state() -> impl Strategy<Value = FilterState> {
    (
        prop::option::of(1..=USERS + 1),
        "[aAbB]{0,2}",
        prop::collection::btree_set(1..=CATEGORIES + 1, 0..3),
    )
        .prop_map(|(owner, search, categories)| {
            FilterState::new()
                .with_owner(owner.map(UserId::new))
                .with_search(search)
                .with_categories(categories.into_iter().map(CategoryId::new))
        })
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::option::of(1..=USERS).prop_map(|o| Action::SelectOwner(o.map(UserId::new))),
        "[a-z]{0,3}".prop_map(Action::SetSearch),
        Just(Action::ClearSearch),
        (1..=CATEGORIES).prop_map(|c| Action::ToggleCategory(CategoryId::new(c))),
        Just(Action::SelectAllCategories),
        sort_key().prop_map(Action::ToggleSort),
        Just(Action::ResetAll),
    ]
}

fn ids<'a>(rows: impl IntoIterator<Item = &'a EnrichedProduct>) -> Vec<u32> {
    rows.into_iter().map(|p| p.id().get()).collect()
}

// ===== Property 1-2: Filter =====

proptest! {
    #[test]
    fn filter_is_order_preserving_subsequence(catalog in catalog(), state in filter_state()) {
        let kept = ids(filter(catalog.products(), &state));

        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]), "order changed: {:?}", kept);
        for product in catalog.products() {
            let included = kept.contains(&product.id().get());
            let passes = matches_owner(product, &state)
                && matches_search(product, &state)
                && matches_categories(product, &state);
            prop_assert_eq!(included, passes);
        }
    }

    #[test]
    fn predicate_order_does_not_matter(catalog in catalog(), state in filter_state()) {
        let reversed = ids(
            catalog
                .products()
                .iter()
                .filter(|p| matches_categories(p, &state))
                .filter(|p| matches_search(p, &state))
                .filter(|p| matches_owner(p, &state)),
        );

        prop_assert_eq!(ids(filter(catalog.products(), &state)), reversed);
    }
}

// ===== Property 3-4: Sort =====

proptest! {
    #[test]
    fn sort_is_stable_in_both_directions(
        catalog in catalog(),
        key in sort_key(),
        direction in direction(),
    ) {
        let rows = sort(catalog.products().iter().collect(), SortState::by(key, direction));

        prop_assert_eq!(rows.len(), catalog.products().len());
        for pair in rows.windows(2) {
            let ordering = compare_by(key, pair[0], pair[1]);
            let expected_not = match direction {
                SortDirection::Asc => Ordering::Greater,
                SortDirection::Desc => Ordering::Less,
            };
            prop_assert_ne!(ordering, expected_not, "rows out of order");
            if ordering == Ordering::Equal {
                prop_assert!(pair[0].id() < pair[1].id(), "equal keys reordered");
            }
        }
    }

    #[test]
    fn unsorted_is_identity(catalog in catalog(), state in filter_state()) {
        let filtered: Vec<_> = filter(catalog.products(), &state).collect();
        let expected = ids(filtered.iter().copied());

        prop_assert_eq!(ids(sort(filtered, SortState::UNSORTED)), expected);
    }

    #[test]
    fn derive_is_filter_then_sort(
        catalog in catalog(),
        filter_state in filter_state(),
        key in sort_key(),
        direction in direction(),
    ) {
        let view = ViewState { filter: filter_state, sort: SortState::by(key, direction) };
        let expected = ids(sort(filter(catalog.products(), &view.filter).collect(), view.sort));

        let derived = derive(&catalog, &view);
        prop_assert_eq!(derived.is_empty(), expected.is_empty());
        prop_assert_eq!(ids(derived.rows().iter().copied()), expected);
    }
}

// ===== Property 5-6: Reducer =====

proptest! {
    #[test]
    fn reset_all_from_any_state_is_default(actions in prop::collection::vec(action(), 0..16)) {
        let state = actions.into_iter().fold(ViewState::default(), reduce);

        prop_assert_eq!(reduce(state, Action::ResetAll), ViewState::default());
    }

    #[test]
    fn same_column_three_times_returns_to_unsorted(key in sort_key()) {
        let state = SortState::UNSORTED.toggle(key).toggle(key).toggle(key);
        prop_assert!(state.is_unsorted());
    }

    #[test]
    fn different_column_starts_ascending(
        current in sort_key(),
        direction in direction(),
        pressed in sort_key(),
    ) {
        prop_assume!(current != pressed);
        let state = SortState::by(current, direction).toggle(pressed);
        prop_assert_eq!(state, SortState::by(pressed, SortDirection::Asc));
    }

    #[test]
    fn sort_actions_leave_filters_alone(
        actions in prop::collection::vec(action(), 0..8),
        key in sort_key(),
    ) {
        let before = actions.into_iter().fold(ViewState::default(), reduce);
        let after = reduce(before.clone(), Action::ToggleSort(key));

        prop_assert_eq!(after.filter, before.filter);
    }
}

// ===== Property 7: Collation =====

proptest! {
    #[test]
    fn collate_is_antisymmetric(a in name(), b in name()) {
        prop_assert_eq!(collate(&a, &b), collate(&b, &a).reverse());
    }

    #[test]
    fn accents_never_cross_base_letter_order(x in "[a-z]{1,6}", y in "[a-z]{1,6}") {
        prop_assume!(x < y);
        prop_assert_eq!(collate(&accented(&x), &y), Ordering::Less);
        prop_assert_eq!(collate(&x, &accented(&y)), Ordering::Less);
    }

    #[test]
    fn accented_word_sorts_right_after_its_base(word in "[a-z]{1,6}") {
        let marked = accented(&word);
        prop_assume!(marked != word);
        prop_assert_eq!(collate(&word, &marked), Ordering::Less);
    }
}
