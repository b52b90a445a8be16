//! Async wrappers run derivation off the runtime threads

use secure_identity_password::{HashingParameters, PasswordError, PasswordHasher};

fn service() -> PasswordHasher {
    PasswordHasher::new(HashingParameters::default().with_iterations(1000))
}

#[tokio::test]
async fn test_hash_async_then_verify_async() {
    let service = service();
    let encoded = service
        .hash_async("async-password")
        .await
        .expect("async hash should succeed");
    assert!(service.verify_async(encoded.clone(), "async-password").await);
    assert!(!service.verify_async(encoded, "wrong").await);
}

#[tokio::test]
async fn test_hash_async_rejects_empty_password() {
    let err = service().hash_async("").await.unwrap_err();
    assert!(matches!(err, PasswordError::InvalidPassword));
}

#[tokio::test]
async fn test_verify_async_malformed_is_false() {
    assert!(!service().verify_async("abc.salt.key", "password").await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_parallel_async_verifications() {
    let service = service();
    let encoded = service.hash("shared").expect("hash should succeed");

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            let encoded = encoded.clone();
            tokio::spawn(async move {
                let candidate = if i % 2 == 0 { "shared" } else { "other" };
                (i, service.verify_async(encoded, candidate).await)
            })
        })
        .collect();

    for task in tasks {
        let (i, matched) = task.await.expect("task should not panic");
        assert_eq!(matched, i % 2 == 0);
    }
}
