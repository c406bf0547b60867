use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("AdminUser")
        .admin(true)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(123456789).await?;

    let auth_guard = AuthGuard::new(db, session);
    let user = auth_guard.require(&[Permission::Admin]).await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "AdminUser");
    assert!(user.admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("987654321")
        .admin(false)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(987654321).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, 987654321);
            assert!(message.contains("admin"));
        }
        other => panic!("expected AccessDenied, got {:?}", other.map(|u| u.discord_id)),
    }

    Ok(())
}
