//! `auth`: local accounts.
//!
//! Outcomes are reported the way the shop shows them, as a notice line.

use secrecy::SecretString;

use phone_city_storefront::auth::Notification;
use phone_city_storefront::{Storefront, StorefrontError};

use super::{AuthAction, print_line};

pub fn run(storefront: &mut Storefront, action: AuthAction) -> Result<(), StorefrontError> {
    let outcome = match action {
        AuthAction::Register {
            name,
            email,
            password,
        } => storefront
            .register(&name, &email, &SecretString::from(password))
            .map(|_| Notification::registered()),
        AuthAction::Login { email, password } => storefront
            .login(&email, &SecretString::from(password))
            .map(|_| Notification::signed_in()),
        AuthAction::Logout => {
            storefront.logout();
            Ok(Notification::signed_out())
        }
        AuthAction::Whoami => {
            match storefront.auth().current() {
                Some(user) => print_line(&format!("{} <{}> (id {})", user.name, user.email, user.id)),
                None => print_line("Гость"),
            }
            return Ok(());
        }
    };

    match outcome {
        Ok(notice) => {
            print_line(&notice.message);
            Ok(())
        }
        Err(StorefrontError::Auth(e)) => {
            print_line(&Notification::from(&e).message);
            Err(e.into())
        }
        Err(e) => Err(e),
    }
}
