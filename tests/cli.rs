use std::io::Write;
use std::process::{Command, Output, Stdio};

use authgen::{digest, Credentials};

fn authgen() -> Output {
    let out = Command::new(env!("CARGO_BIN_EXE_authgen"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(out.status.success(), "{out:?}");
    out
}

fn verify(hash: &str, salt: &str, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_verify"))
        .args(["--hash", hash, "--salt", salt])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn hash_matches_printed_values() {
    let out = String::from_utf8(authgen().stdout).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3, "{out}");

    let hash = lines[0].strip_prefix("Hash: ").unwrap();
    let salt = lines[1].strip_prefix("Salt: ").unwrap();
    let secret = lines[2].strip_prefix("Secret: ").unwrap();

    assert_eq!(hash.len(), 64);
    assert!(secret.len() > salt.len());
    assert_eq!(digest::hash(secret, salt), hash);
}

#[test]
fn runs_differ() {
    let a: Credentials = String::from_utf8(authgen().stdout).unwrap().parse().unwrap();
    let b: Credentials = String::from_utf8(authgen().stdout).unwrap().parse().unwrap();
    assert_ne!(a.salt, b.salt);
    assert_ne!(a.secret, b.secret);
}

#[test]
fn rejects_arguments() {
    let out = Command::new(env!("CARGO_BIN_EXE_authgen"))
        .arg("--length")
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn verify_generated() {
    let creds: Credentials = String::from_utf8(authgen().stdout).unwrap().parse().unwrap();

    let out = verify(&creds.hash, &creds.salt, &format!("{}\n", creds.secret));
    assert!(out.status.success(), "{out:?}");
    assert_eq!(out.stdout, b"valid\n");

    let out = verify(&creds.hash, &creds.salt, &creds.secret);
    assert!(out.status.success(), "{out:?}");

    let out = verify(&creds.hash, &creds.salt, "guess\n");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let out = verify(&creds.hash, &creds.secret, &format!("{}\n", creds.salt));
    assert!(!out.status.success());

    let out = verify("abc", &creds.salt, &creds.secret);
    assert!(!out.status.success());
}
