//! Read-side shaping of post collections: category buckets and free-text
//! search.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Category, Post};

/// Posts partitioned into the fixed category buckets.
///
/// Every bucket is present, in [`Category::ALL`] order, even when empty.
/// Posts whose category matches no bucket are dropped. Within a bucket the
/// input order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedPosts {
    buckets: Vec<(Category, Vec<Post>)>,
}

impl CategorizedPosts {
    /// Partition `posts` into buckets.
    ///
    /// # Examples
    /// ```
    /// use blog::domain::{CategorizedPosts, Category};
    ///
    /// let listing = CategorizedPosts::partition(Vec::new());
    /// assert!(listing.bucket(Category::Travel).is_empty());
    /// ```
    pub fn partition(posts: Vec<Post>) -> Self {
        let mut buckets: Vec<(Category, Vec<Post>)> = Category::ALL
            .into_iter()
            .map(|category| (category, Vec::new()))
            .collect();
        for post in posts {
            let Some(category) = post.bucket() else {
                continue;
            };
            if let Some((_, bucket)) = buckets.iter_mut().find(|(c, _)| *c == category) {
                bucket.push(post);
            }
        }
        Self { buckets }
    }

    /// Posts listed under `category`.
    pub fn bucket(&self, category: Category) -> &[Post] {
        self.buckets
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(&[], |(_, posts)| posts.as_slice())
    }
}

impl Serialize for CategorizedPosts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (category, posts) in &self.buckets {
            map.serialize_entry(category.label(), posts)?;
        }
        map.end()
    }
}

/// Case-insensitive substring query over title, content, and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Build a query. The empty query matches every post.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The query exactly as the user typed it.
    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    /// Whether `post` matches on any of the searchable fields.
    ///
    /// # Examples
    /// ```
    /// use blog::domain::{Post, PostDraft, SearchQuery};
    ///
    /// let post = Post::create(
    ///     PostDraft { category: "Social Media".into(), ..PostDraft::default() },
    ///     chrono::Utc::now(),
    /// );
    /// assert!(SearchQuery::new("social").matches(&post));
    /// ```
    pub fn matches(&self, post: &Post) -> bool {
        [post.title(), post.content(), post.category()]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
