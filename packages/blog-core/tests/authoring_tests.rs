//! Post authoring and edit permissions
//!
//! Authors may edit and delete their own posts, admins any post, everyone
//! else gets `PermissionDenied` with the post left as it was.

mod common;

use crate::common::*;
use blog_core::common::{BlogError, MemberId};
use blog_core::domains::posts::{Category, PostDraft, PostQuery};
use blog_core::kernel::seed::{HOME_OFFICE_POST, JANE_SMITH, JOHN_DOE, WEB_TRENDS_POST};
use blog_core::BlogStore;

fn draft(title: &str) -> PostDraft {
    PostDraft::builder()
        .title(title)
        .content("<h2>Heading</h2><p>Some <em>rich</em> text for the body.</p>")
        .category(Some(Category::Business))
        .tags("startups, funding , ,")
        .published(true)
        .build()
}

fn seeded_with_admin() -> BlogStore {
    let mut store = BlogStore::seeded().unwrap();
    store.add_member(test_admin()).unwrap();
    store
}

// ============================================================================
// Create
// ============================================================================

#[test]
fn create_post_appends_to_store() {
    let mut store = BlogStore::seeded().unwrap();

    let id = store.create_post(JANE_SMITH, draft("Raising a seed round")).unwrap();

    let post = store.post(id).unwrap();
    assert_eq!(store.posts().last().map(|p| p.id), Some(id));
    assert_eq!(post.author_id, JANE_SMITH);
    assert_eq!(post.tags, vec!["startups", "funding"]);
    assert_eq!(post.likes, 0);
    assert!(post.comments.is_empty());
    assert_eq!(post.comments.post_id(), id);
}

#[test]
fn generated_excerpt_is_short_and_plain() {
    let mut store = BlogStore::seeded().unwrap();
    let mut long = draft("Long read");
    long.content = format!("<p>{}</p>", "lorem ipsum ".repeat(100));

    let id = store.create_post(JOHN_DOE, long).unwrap();
    let excerpt = &store.post(id).unwrap().excerpt;

    assert_eq!(excerpt.chars().count(), 200);
    assert!(!excerpt.contains('<'));
}

#[test]
fn new_post_is_searchable_once_published() {
    let mut store = BlogStore::seeded().unwrap();
    let mut hidden = draft("Quarterly planning");
    hidden.published = false;

    let id = store.create_post(JOHN_DOE, hidden).unwrap();
    let query = PostQuery::builder().text("quarterly").build();
    assert!(store.search(&query).is_empty());

    let mut shown = PostDraft::from_post(store.post(id).unwrap());
    shown.published = true;
    store.update_post(JOHN_DOE, id, shown).unwrap();
    assert_eq!(ids(&store.search(&query)), vec![id]);
}

#[test]
fn create_requires_known_author() {
    let mut store = BlogStore::seeded().unwrap();
    let stranger = MemberId::from_u128(55);

    let err = store.create_post(stranger, draft("Hello")).unwrap_err();
    assert_eq!(err, BlogError::MemberNotFound(stranger));
    assert_eq!(store.posts().len(), 3);
}

#[test]
fn create_requires_title_and_category() {
    let mut store = BlogStore::seeded().unwrap();

    let err = store.create_post(JOHN_DOE, draft("  ")).unwrap_err();
    assert!(matches!(err, BlogError::Validation(_)));

    let mut uncategorized = draft("Hello");
    uncategorized.category = None;
    let err = store.create_post(JOHN_DOE, uncategorized).unwrap_err();
    assert!(matches!(err, BlogError::Validation(_)));

    assert_eq!(store.posts().len(), 3);
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn update_preserves_created_at() {
    let mut store = BlogStore::seeded().unwrap();
    let before = store.post(WEB_TRENDS_POST).unwrap().clone();

    store
        .update_post(JOHN_DOE, WEB_TRENDS_POST, draft("Retitled"))
        .unwrap();

    let after = store.post(WEB_TRENDS_POST).unwrap();
    assert_eq!(after.title, "Retitled");
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
    assert_eq!(after.likes, before.likes);
    assert_eq!(after.comments, before.comments);
}

#[test]
fn non_author_cannot_update() {
    let mut store = BlogStore::seeded().unwrap();
    let before = store.post(WEB_TRENDS_POST).unwrap().clone();

    let err = store
        .update_post(JANE_SMITH, WEB_TRENDS_POST, draft("Hijacked"))
        .unwrap_err();

    assert_eq!(
        err,
        BlogError::PermissionDenied {
            member_id: JANE_SMITH,
            post_id: WEB_TRENDS_POST,
        }
    );
    assert_eq!(store.post(WEB_TRENDS_POST), Some(&before));
}

#[test]
fn admin_can_update_any_post() {
    let mut store = seeded_with_admin();

    store
        .update_post(TEST_ADMIN, WEB_TRENDS_POST, draft("Moderated"))
        .unwrap();
    assert_eq!(store.post(WEB_TRENDS_POST).unwrap().title, "Moderated");
}

#[test]
fn invalid_update_changes_nothing() {
    let mut store = BlogStore::seeded().unwrap();
    let before = store.post(WEB_TRENDS_POST).unwrap().clone();

    let err = store
        .update_post(JOHN_DOE, WEB_TRENDS_POST, draft(""))
        .unwrap_err();

    assert!(matches!(err, BlogError::Validation(_)));
    assert_eq!(store.post(WEB_TRENDS_POST), Some(&before));
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn author_deletes_own_post() {
    let mut store = BlogStore::seeded().unwrap();

    let removed = store.delete_post(JOHN_DOE, HOME_OFFICE_POST).unwrap();

    assert_eq!(removed.id, HOME_OFFICE_POST);
    assert!(store.post(HOME_OFFICE_POST).is_none());
    assert_eq!(store.posts().len(), 2);
}

#[test]
fn non_author_cannot_delete() {
    let mut store = BlogStore::seeded().unwrap();

    let err = store.delete_post(JANE_SMITH, HOME_OFFICE_POST).unwrap_err();
    assert!(matches!(err, BlogError::PermissionDenied { .. }));
    assert!(store.post(HOME_OFFICE_POST).is_some());
}

#[test]
fn admin_deletes_any_post() {
    let mut store = seeded_with_admin();
    store.delete_post(TEST_ADMIN, WEB_TRENDS_POST).unwrap();
    assert!(store.post(WEB_TRENDS_POST).is_none());
}

#[test]
fn deleting_twice_is_not_found() {
    let mut store = BlogStore::seeded().unwrap();
    store.delete_post(JOHN_DOE, HOME_OFFICE_POST).unwrap();

    let err = store.delete_post(JOHN_DOE, HOME_OFFICE_POST).unwrap_err();
    assert_eq!(err, BlogError::PostNotFound(HOME_OFFICE_POST));
}

// ============================================================================
// Members
// ============================================================================

#[test]
fn usernames_are_unique() {
    let mut store = BlogStore::seeded().unwrap();
    let mut clash = test_author();
    clash.username = "john_doe".to_string();

    let err = store.add_member(clash).unwrap_err();
    assert!(matches!(err, BlogError::Validation(_)));
    assert_eq!(store.member_by_username("john_doe").map(|m| m.id), Some(JOHN_DOE));
}
