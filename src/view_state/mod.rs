//! View models behind every screen.
//!
//! Each view model owns its state in a [`Container`](crate::shared::Container)
//! so the UI can render from a snapshot and re-render on change, and exposes
//! its actions as futures the app spawns. Loads take a ticket from a
//! [`RequestGeneration`] so late answers never overwrite newer state.
//!
//! ## Components
//!
//! - [`LoadState`] / [`RequestGeneration`]: fetch lifecycle and stale-drop
//! - [`optimistic`]: apply-now, revert-on-failure updates
//! - [`Pagination`]: page arithmetic
//! - [`FieldErrors`] / [`FormState`]: form inputs and server-side errors
//! - [`HomeView`], [`ArticleList`], [`TagList`]: the home screen
//! - [`ArticleView`], [`CommentList`], [`CommentForm`]: an article and its thread
//! - [`ProfileView`]: a user's page
//! - [`LoginForm`], [`RegisterForm`], [`SettingsForm`], [`EditorView`]: forms
//! - [`Notifications`]: the message stack

pub mod article;
pub mod article_list;
pub mod comments;
pub mod editor;
pub mod forms;
pub mod home;
mod load_state;
pub mod login;
pub mod notifications;
mod optimistic;
mod pagination;
pub mod profile;
pub mod register;
pub mod settings;
pub mod tags;

pub use article::ArticleView;
pub use article_list::{ArticleList, ArticleListState, ArticlePage};
pub use comments::{CommentForm, CommentFormState, CommentList};
pub use editor::{EditorFields, EditorView};
pub use forms::{FieldErrors, FieldSet, FormState, FormStatus};
pub use home::{HomeTab, HomeView};
pub use load_state::{LoadState, RequestGeneration, Ticket};
pub use login::{LoginFields, LoginForm};
pub use notifications::Notifications;
pub use optimistic::optimistic;
pub use pagination::Pagination;
pub use profile::{ProfileTab, ProfileView};
pub use register::{RegisterFields, RegisterForm};
pub use settings::{SettingsFields, SettingsForm};
pub use tags::{TagList, TagListState};
