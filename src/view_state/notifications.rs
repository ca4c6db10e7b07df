//! Stack of user-facing notifications.

use crate::context::AppContext;
use crate::shared::{Container, Subscription};

/// Collects every message sent on the notification channel until the user
/// dismisses it.
#[derive(Clone, Debug)]
pub struct Notifications {
    pub items: Container<Vec<String>>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: Container::new(Vec::new()),
        }
    }

    /// Start collecting from `ctx`'s notification channel.
    pub fn observe(&self, ctx: &AppContext) -> Subscription {
        let items = self.items.clone();
        ctx.notifications
            .add_listener(move |message: &String| items.update(|list| list.push(message.clone())))
    }

    /// Remove the message at `index`; out-of-range indexes are ignored.
    pub fn dismiss(&self, index: usize) {
        self.items.update(|list| {
            if index < list.len() {
                list.remove(index);
            }
        });
    }

    /// Remove the newest message.
    pub fn dismiss_latest(&self) {
        self.items.update(|list| {
            list.pop();
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.with_state(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::context;

    #[test]
    fn test_collects_and_dismisses() {
        let (ctx, _) = context();
        let notifications = Notifications::new();
        let _sub = notifications.observe(&ctx);

        ctx.notify("first");
        ctx.notify("second");
        ctx.notify("third");
        assert_eq!(notifications.items.state().len(), 3);

        notifications.dismiss(1);
        assert_eq!(notifications.items.state(), vec!["first", "third"]);
        notifications.dismiss(9);
        notifications.dismiss_latest();
        assert_eq!(notifications.items.state(), vec!["first"]);
    }

    #[test]
    fn test_messages_before_observe_are_lost() {
        let (ctx, _) = context();
        ctx.notify("early");
        let notifications = Notifications::new();
        let sub = notifications.observe(&ctx);
        assert!(notifications.is_empty());

        sub.unsubscribe();
        ctx.notify("late");
        assert!(notifications.is_empty());
    }
}
