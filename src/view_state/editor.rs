//! Article editor for new and existing articles.

use std::future::Future;

use super::forms::{FieldErrors, FieldSet, FormState, FormStatus};
use super::load_state::{LoadState, RequestGeneration};
use crate::context::AppContext;
use crate::error::ConduitError;
use crate::models::{Article, ArticleDraft};
use crate::routes::Route;
use crate::shared::Container;

pub const ARTICLE_NOT_FOUND: &str = "ERROR: Article not found !";
pub const ARTICLE_LOAD_FAILED: &str =
    "ERROR: An unexpected error occured while loading the article. Please try again later.";

/// Position of the tag input among the editor fields.
pub const TAG_INPUT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorFields {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_input: String,
    pub tag_list: Vec<String>,
}

impl EditorFields {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            body: article.body.clone(),
            tag_input: String::new(),
            tag_list: article.tag_list.clone(),
        }
    }

    pub fn draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            body: self.body.clone(),
            tag_list: self.tag_list.clone(),
        }
    }

    /// Move the tag input into the tag list. Empty input and tags already
    /// in the list are ignored; the input is cleared either way.
    pub fn add_tag(&mut self) {
        let tag = self.tag_input.trim().to_string();
        self.tag_input.clear();
        if tag.is_empty() || self.tag_list.contains(&tag) {
            return;
        }
        self.tag_list.push(tag);
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tag_list.retain(|t| t != tag);
    }
}

impl FieldSet for EditorFields {
    fn labels() -> &'static [&'static str] {
        &[
            "Article Title",
            "What's this article about?",
            "Write your article (in markdown)",
            "Enter tags",
        ]
    }

    fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.title),
            1 => Some(&self.description),
            2 => Some(&self.body),
            TAG_INPUT => Some(&self.tag_input),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.title),
            1 => Some(&mut self.description),
            2 => Some(&mut self.body),
            TAG_INPUT => Some(&mut self.tag_input),
            _ => None,
        }
    }

    fn is_multiline(index: usize) -> bool {
        index == 2
    }
}

#[derive(Clone, Debug)]
pub struct EditorView {
    ctx: AppContext,
    /// `Some` when editing an existing article.
    pub slug: Option<String>,
    pub state: Container<LoadState<FormState<EditorFields>>>,
    generation: RequestGeneration,
}

impl EditorView {
    /// An empty form for a new article.
    pub fn new_article(ctx: AppContext) -> Self {
        Self {
            ctx,
            slug: None,
            state: Container::new(LoadState::Loaded(FormState::default())),
            generation: RequestGeneration::new(),
        }
    }

    /// A form for `slug`; call [`load`](Self::load) to fill it.
    pub fn edit_article(ctx: AppContext, slug: impl Into<String>) -> Self {
        Self {
            ctx,
            slug: Some(slug.into()),
            state: Container::new(LoadState::Loading),
            generation: RequestGeneration::new(),
        }
    }

    /// Fetch the article being edited. Nothing to do for a new article.
    pub fn load(&self) -> impl Future<Output = ()> + Send + 'static {
        let ticket = self.generation.begin();
        let slug = self.slug.clone();
        if slug.is_some() {
            self.state.set_state(LoadState::Loading);
        }

        let api = self.ctx.api.clone();
        let state = self.state.clone();
        let generation = self.generation.clone();
        async move {
            let Some(slug) = slug else {
                return;
            };
            let result = api.get_article(&slug).await;
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(article) => state.set_state(LoadState::Loaded(FormState::new(
                    EditorFields::from_article(&article),
                ))),
                Err(ConduitError::NotFound) => {
                    state.set_state(LoadState::Failed(ARTICLE_NOT_FOUND.to_string()))
                }
                Err(e) => {
                    tracing::warn!("Loading article {} for editing failed: {}", slug, e);
                    state.set_state(LoadState::Failed(ARTICLE_LOAD_FAILED.to_string()));
                }
            }
        }
    }

    /// Mutate the form if it is editable.
    pub fn edit(&self, f: impl FnOnce(&mut FormState<EditorFields>)) {
        self.state.update(|s| {
            if let Some(form) = s.loaded_mut() {
                if !form.status.is_submitting() {
                    f(form);
                }
            }
        });
    }

    pub fn add_tag(&self) {
        self.edit(|form| form.fields.add_tag());
    }

    pub fn remove_tag(&self, tag: &str) {
        self.edit(|form| form.fields.remove_tag(tag));
    }

    /// Publish the article. Resolves to the article route on success.
    pub fn submit(&self) -> impl Future<Output = Option<Route>> + Send + 'static {
        let draft = self.state.with_state(|s| {
            s.loaded()
                .filter(|form| !form.status.is_submitting())
                .map(|form| form.fields.draft())
        });
        if draft.is_some() {
            self.state.update(|s| {
                if let Some(form) = s.loaded_mut() {
                    form.status = FormStatus::Submitting;
                }
            });
        }

        let api = self.ctx.api.clone();
        let state = self.state.clone();
        let slug = self.slug.clone();
        async move {
            let draft = draft?;
            let result = match &slug {
                Some(slug) => api.update_article(slug, &draft).await,
                None => api.create_article(&draft).await,
            };
            match result {
                Ok(article) => {
                    tracing::info!("Published article {}", article.slug);
                    state.update(|s| {
                        if let Some(form) = s.loaded_mut() {
                            form.status = FormStatus::Editing;
                        }
                    });
                    Some(Route::Article(article.slug))
                }
                Err(e) => {
                    tracing::warn!("Publishing article failed: {}", e);
                    state.update(|s| {
                        if let Some(form) = s.loaded_mut() {
                            form.status = FormStatus::Failed(FieldErrors::from_error(&e));
                        }
                    });
                    None
                }
            }
        }
    }

    pub fn unmount(&self) {
        self.generation.invalidate();
    }
}
