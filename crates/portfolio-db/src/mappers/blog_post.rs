//! Blog post model -> entity mapper

use portfolio_core::entities::BlogPost;

use crate::models::BlogPostModel;

impl From<BlogPostModel> for BlogPost {
    fn from(model: BlogPostModel) -> Self {
        BlogPost {
            id: model.id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            tags: model.tags,
            published: model.published,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
