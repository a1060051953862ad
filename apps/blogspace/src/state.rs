//! Application state - the wired repositories and the page views built on them.

use std::sync::Arc;

use chrono::SecondsFormat;
use serde::Serialize;

use blogspace_core::domain::{Comment, LikeStatus, Post, User, UserId};
use blogspace_core::ports::{
    CommentRepository, KeyValueStore, LikeRepository, PostRepository, UserRepository,
};
use blogspace_core::views::{self, Page, SearchParams};
use blogspace_infra::{
    FileStore, InMemoryStore, StoredCommentRepository, StoredLikeRepository,
    StoredPostRepository, StoredUserRepository,
};
use blogspace_shared::PageResponse;
use blogspace_shared::dto::{AuthorSummary, PostCard};

use crate::config::{AppConfig, StorageConfig};
use crate::error::{AppError, AppResult};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
}

/// Everything the home page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub featured: Vec<PostCard>,
    pub recent: Vec<PostCard>,
    pub tags: Vec<String>,
    pub listing: PageResponse<PostCard>,
}

/// Search page results with the tag choices offered alongside them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: Option<String>,
    pub tag: Option<String>,
    pub results: Vec<PostCard>,
    pub tags: Vec<String>,
}

/// Everything the post page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub card: PostCard,
    pub content: String,
    pub related: Vec<PostCard>,
    pub comments: Vec<Comment>,
    pub comment_count: usize,
    pub likes: LikeStatus,
}

impl AppState {
    /// Open the configured store and load every collection from it.
    pub async fn new(config: &AppConfig) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.storage {
            StorageConfig::Memory => {
                tracing::warn!("BLOGSPACE_DATA_DIR not set. Running with in-memory storage.");
                Arc::new(InMemoryStore::new())
            }
            StorageConfig::Files(dir) => Arc::new(
                FileStore::open(dir)
                    .await
                    .map_err(|e| AppError::Internal(e.to_string()))?,
            ),
            #[cfg(feature = "redis")]
            StorageConfig::Redis(redis) => Arc::new(
                blogspace_infra::RedisStore::connect(redis.clone())
                    .await
                    .map_err(|e| AppError::Internal(e.to_string()))?,
            ),
        };

        Self::with_store(store, config.seed_samples).await
    }

    /// Build the repositories on top of an already opened store.
    pub async fn with_store(store: Arc<dyn KeyValueStore>, seed_samples: bool) -> AppResult<Self> {
        let users: Arc<dyn UserRepository> =
            Arc::new(StoredUserRepository::load(store.clone(), seed_samples).await?);
        let posts: Arc<dyn PostRepository> = Arc::new(
            StoredPostRepository::load(store.clone(), users.clone(), seed_samples).await?,
        );
        let comments = Arc::new(StoredCommentRepository::new(store.clone()));
        let likes = Arc::new(StoredLikeRepository::new(store));

        tracing::info!("Application state initialized");

        Ok(Self {
            users,
            posts,
            comments,
            likes,
        })
    }

    /// Join a post with its author for listing.
    pub async fn card(&self, post: &Post) -> PostCard {
        let author = match self.users.find_by_id(&post.author_id).await {
            Some(user) => AuthorSummary {
                id: user.id.to_string(),
                avatar: user.avatar_url(),
                name: user.name,
            },
            None => AuthorSummary {
                id: post.author_id.to_string(),
                name: "Unknown author".to_string(),
                avatar: User::default_avatar(post.author_id.as_str()),
            },
        };

        PostCard {
            id: post.id.to_string(),
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            tags: post.tags.clone(),
            featured_image: post.featured_image.clone(),
            read_time: post.read_time,
            date: post
                .effective_date()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            author,
        }
    }

    async fn cards(&self, posts: &[Post]) -> Vec<PostCard> {
        let mut cards = Vec::with_capacity(posts.len());
        for post in posts {
            cards.push(self.card(post).await);
        }
        cards
    }

    async fn page(&self, listing: Page<Post>) -> PageResponse<PostCard> {
        PageResponse {
            items: self.cards(&listing.items).await,
            page: listing.page,
            total_pages: listing.total_pages,
            total_items: listing.total_items,
            has_next: listing.has_next(),
            has_previous: listing.has_previous(),
        }
    }

    /// Featured and recent strips, tag facets, and one page of the published
    /// feed, optionally narrowed to a tag.
    pub async fn home_page(&self, tag: Option<&str>, page: usize) -> HomePage {
        let posts = self.posts.snapshot().await;
        let feed = views::home_feed(&posts);

        HomePage {
            featured: self.cards(&feed.featured).await,
            recent: self.cards(&feed.recent).await,
            tags: views::tag_facets(&posts),
            listing: self.page(views::posts_listing(&posts, tag, page)).await,
        }
    }

    pub async fn search(&self, params: &SearchParams) -> SearchResults {
        let posts = self.posts.snapshot().await;
        let results = views::search_page(&posts, params);

        SearchResults {
            query: params.query.clone(),
            tag: params.tag.clone(),
            results: self.cards(&results).await,
            tags: views::tag_facets(&posts),
        }
    }

    /// The post page for `slug`. Drafts are only shown to their author.
    pub async fn post_detail(&self, slug: &str, viewer: Option<&UserId>) -> AppResult<PostDetail> {
        let post = self.posts.get_by_slug(slug).await?;
        if !post.is_published() && viewer.is_none_or(|v| !post.is_owned_by(v)) {
            return Err(AppError::NotFound(format!("Post {} not found", slug)));
        }

        let related = views::related_posts(&post, &self.posts.snapshot().await);
        let comments = views::comment_tree(self.comments.list(&post.id).await?);
        let comment_count = views::total_comments(&comments);
        let likes = self.likes.status(&post.id, viewer).await?;

        Ok(PostDetail {
            card: self.card(&post).await,
            related: self.cards(&related).await,
            content: post.content,
            comments,
            comment_count,
            likes,
        })
    }
}
