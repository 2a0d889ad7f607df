use blog_api::domain::comment::entity::Comment;
use blog_api::domain::post::entity::Post;
use blog_api::domain::social::like::{self, LikeTally, Likeable};

#[test]
fn toggle_is_an_involution() {
    let mut post = Post {
        id: 1,
        author_id: 42,
        ..Default::default()
    };
    let before = post.clone();

    like::toggle(&mut post, 7);
    like::toggle(&mut post, 7);

    assert_eq!(post.likers, before.likers);
    assert_eq!(post.like_count, before.like_count);
}

#[test]
fn toggle_scenario_two_actors() {
    let mut post = Post::default();
    assert!(post.likers.is_empty());
    assert_eq!(post.like_count, 0);

    let outcome = like::toggle(&mut post, 7);
    assert!(outcome.liked);
    assert_eq!(outcome.like_count, 1);
    assert!(post.likers.contains(&7));

    let outcome = like::toggle(&mut post, 9);
    assert!(outcome.liked);
    assert_eq!(outcome.like_count, 2);

    let outcome = like::toggle(&mut post, 7);
    assert!(!outcome.liked);
    assert_eq!(outcome.like_count, 1);
    assert!(!post.likers.contains(&7));
    assert!(post.likers.contains(&9));
}

#[test]
fn count_matches_set_size_after_any_sequence() {
    let mut comment = Comment::default();
    let sequence = [3, 5, 3, 8, 5, 5, 13, 3, 8];

    for actor in sequence {
        like::toggle(&mut comment, actor);
        assert_eq!(comment.like_count, comment.likers.len() as i64);
    }
}

#[test]
fn no_duplicate_membership() {
    let mut post = Post::default();
    like::toggle(&mut post, 4);
    like::toggle(&mut post, 4);
    like::toggle(&mut post, 4);

    assert_eq!(post.likers.iter().filter(|&&id| id == 4).count(), 1);
    assert_eq!(post.like_count, 1);
}

#[test]
fn toggle_leaves_other_fields_untouched() {
    let mut post = Post {
        id: 10,
        author_id: 2,
        title: "Hello".to_string(),
        subtitle: "World".to_string(),
        body: "Body".to_string(),
        category: Some("Movies".to_string()),
        date: "August 01, 2025".to_string(),
        ..Default::default()
    };

    like::toggle(&mut post, 99);

    assert_eq!(post.id, 10);
    assert_eq!(post.author_id, 2);
    assert_eq!(post.title, "Hello");
    assert_eq!(post.subtitle, "World");
    assert_eq!(post.body, "Body");
    assert_eq!(post.category.as_deref(), Some("Movies"));
    assert_eq!(post.date, "August 01, 2025");
}

#[test]
fn tally_from_likers_dedupes_and_counts() {
    let tally = LikeTally::from_likers([5, 5, 9]);
    assert_eq!(tally.likers.len(), 2);
    assert_eq!(tally.like_count, 2);
    assert_eq!(tally.like_count(), tally.likers().len() as i64);
}
