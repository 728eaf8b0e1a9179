//! Transient user-visible notices for account actions.

use std::time::Duration;

use super::AuthError;

/// How long a notice stays on screen.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A toast shown after login, registration or logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn new(level: NotificationLevel, message: &str) -> Self {
        Self {
            level,
            message: message.to_owned(),
        }
    }

    #[must_use]
    pub fn signed_in() -> Self {
        Self::new(NotificationLevel::Success, "Вы успешно вошли в аккаунт")
    }

    #[must_use]
    pub fn registered() -> Self {
        Self::new(NotificationLevel::Success, "Вы успешно зарегистрировались")
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::new(NotificationLevel::Info, "Вы успешно вышли из аккаунта")
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.level, NotificationLevel::Error)
    }
}

impl From<&AuthError> for Notification {
    fn from(err: &AuthError) -> Self {
        let message = match err {
            AuthError::MissingFields => "Пожалуйста, заполните все поля",
            AuthError::WeakPassword(_) => "Пароль должен содержать не менее 6 символов",
            AuthError::InvalidEmail(_) => "Введите корректный email",
            AuthError::InvalidCredentials => "Неверный email или пароль",
            AuthError::UserAlreadyExists => "Пользователь с таким email уже существует",
            AuthError::Storage(_) | AuthError::PasswordHash => {
                "Не удалось выполнить операцию, попробуйте позже"
            }
        };
        Self::new(NotificationLevel::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let notice = Notification::from(&AuthError::InvalidCredentials);
        assert!(notice.is_error());
        assert_eq!(notice.message, "Неверный email или пароль");

        let notice = Notification::from(&AuthError::UserAlreadyExists);
        assert_eq!(notice.message, "Пользователь с таким email уже существует");
    }

    #[test]
    fn test_success_levels() {
        assert_eq!(Notification::signed_in().level, NotificationLevel::Success);
        assert_eq!(Notification::signed_out().level, NotificationLevel::Info);
        assert!(!Notification::registered().is_error());
        assert_eq!(DISMISS_AFTER.as_secs(), 5);
    }
}
