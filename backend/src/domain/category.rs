//! Fixed category buckets used to partition posts for display.

use std::fmt;

use serde::Serialize;

/// One of the fixed buckets a post can be listed under.
///
/// Posts store their category as free text; only an exact match against
/// [`Category::label`] places a post in a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Fashion")]
    Fashion,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Education")]
    Education,
}

impl Category {
    /// Every bucket, in display order.
    pub const ALL: [Self; 4] = [Self::Travel, Self::Fashion, Self::SocialMedia, Self::Education];

    /// Display label, identical to the stored category string.
    pub fn label(self) -> &'static str {
        match self {
            Self::Travel => "Travel",
            Self::Fashion => "Fashion",
            Self::SocialMedia => "Social Media",
            Self::Education => "Education",
        }
    }

    /// Resolve a stored category string to its bucket. Case-sensitive.
    ///
    /// # Examples
    /// ```
    /// use blog::domain::Category;
    ///
    /// assert_eq!(Category::from_label("Social Media"), Some(Category::SocialMedia));
    /// assert_eq!(Category::from_label("travel"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
