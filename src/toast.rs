//! Toast Queue
//!
//! Ordered list of transient messages. The `Toaster` component renders it
//! and schedules each toast's dismissal.

use crate::error::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// How long a toast stays on screen
pub const TOAST_TTL_MS: u32 = 3_000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Record a form outcome: one error toast when rejected, otherwise one
    /// success toast built from the accepted value
    pub fn settle<T>(
        &mut self,
        outcome: Result<T, FormError>,
        success: impl FnOnce(&T) -> String,
    ) -> Option<T> {
        match outcome {
            Ok(value) => {
                self.push(ToastKind::Success, success(&value));
                Some(value)
            }
            Err(e) => {
                self.push(ToastKind::Error, e.to_string());
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{require_non_empty, validate_email};

    #[test]
    fn push_assigns_increasing_ids_in_order() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Item added successfully");
        let b = queue.push(ToastKind::Error, "Item name cannot be empty");
        assert!(b > a);
        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Item added successfully", "Item name cannot be empty"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        let b = queue.push(ToastKind::Success, "two");
        queue.dismiss(a);
        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
        queue.dismiss(b);
        assert!(queue.is_empty());
    }

    fn kinds(queue: &ToastQueue) -> Vec<ToastKind> {
        queue.toasts().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn blank_name_rejects_without_success_toast() {
        for raw in ["", "   \t"] {
            let mut queue = ToastQueue::default();
            let accepted = queue.settle(
                require_non_empty("Category name", raw).map(str::to_string),
                |name| format!("Category \"{}\" added", name),
            );
            assert_eq!(accepted, None);
            assert_eq!(kinds(&queue), vec![ToastKind::Error]);
            assert_eq!(queue.toasts()[0].message, "Category name cannot be empty");
        }
    }

    #[test]
    fn valid_name_pushes_one_success_toast() {
        let mut queue = ToastQueue::default();
        let accepted = queue.settle(
            require_non_empty("Household name", "  Beach House ").map(str::to_string),
            |name| format!("Household \"{}\" created", name),
        );
        assert_eq!(accepted.as_deref(), Some("Beach House"));
        assert_eq!(kinds(&queue), vec![ToastKind::Success]);
        assert_eq!(queue.toasts()[0].message, "Household \"Beach House\" created");
    }

    #[test]
    fn invalid_email_rejects_invite() {
        let mut queue = ToastQueue::default();
        let accepted = queue.settle(validate_email("not-an-email").map(str::to_string), |email| {
            format!("Invitation sent to {}", email)
        });
        assert!(accepted.is_none());
        assert_eq!(kinds(&queue), vec![ToastKind::Error]);
        assert_eq!(queue.toasts()[0].message, "Please enter a valid email address");
    }

    #[test]
    fn empty_selection_rejects_batch() {
        let mut queue = ToastQueue::default();
        let accepted = queue.settle(Err::<usize, _>(FormError::NothingSelected), |n| {
            format!("{} items added to inventory", n)
        });
        assert!(accepted.is_none());
        assert_eq!(queue.toasts()[0].message, "No items selected");
    }
}
