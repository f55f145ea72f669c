//! End-to-end exercise of the filesystem doubles through the port trait.
//!
//! Application code sees only `&dyn FileSystem`; these tests drive a small
//! provisioning flow against the recording and failing doubles and assert
//! on the action log the way a consumer's test suite would.

use std::io::Read;
use std::path::Path;

use scrim::adapters::failing::FailingFileSystem;
use scrim::adapters::recording::RecordingFileSystem;
use scrim::ports::{File, FileSystem, OpenFlags};

/// Reads a config file through the port, the way application code would.
fn load_config(fs: &dyn FileSystem, path: &Path) -> std::io::Result<String> {
    let mut file = fs.open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Lays out a repository skeleton through the port.
fn provision_repo(fs: &dyn FileSystem, root: &Path) -> std::io::Result<()> {
    fs.mkdir_all(&root.join("hooks"), 0o755)?;
    let mut config = fs.create(&root.join("config"))?;
    config.write_str("bare = true")?;
    fs.open_file(&root.join("hooks/post-receive"), OpenFlags::read_write(), 0o700)?;
    fs.stat(&root.join("config"))?;
    Ok(())
}

#[test]
fn recording_fs_logs_a_whole_session_in_invocation_order() {
    let fs = RecordingFileSystem::new();
    provision_repo(&fs, Path::new("/srv/repos/app.git")).unwrap();

    assert_eq!(
        fs.actions(),
        vec![
            "mkdirall /srv/repos/app.git/hooks with mode 0o755",
            "create /srv/repos/app.git/config",
            "openfile /srv/repos/app.git/hooks/post-receive with mode 0o700",
            "stat /srv/repos/app.git/config",
        ]
    );
}

#[test]
fn written_content_survives_a_reopen() {
    let fs = RecordingFileSystem::new();
    provision_repo(&fs, Path::new("/srv/repos/app.git")).unwrap();

    let content = load_config(&fs, Path::new("/srv/repos/app.git/config")).unwrap();
    assert_eq!(content, "bare = true");
}

#[test]
fn the_same_flow_fails_against_the_failing_double() {
    let fs = FailingFileSystem::with_content("bare = true");
    let err = load_config(&fs, Path::new("/srv/repos/app.git/config"))
        .err()
        .expect("open should fail");

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert!(fs.has_action("open /srv/repos/app.git/config"));
}

#[test]
fn failing_double_records_the_whole_attempted_session() {
    let fs = FailingFileSystem::new();
    let result = provision_repo(&fs, Path::new("/srv/repos/app.git"));

    // `open_file` is the first failing operation; everything before it
    // succeeded and everything attempted is in the log.
    assert!(result.is_err());
    assert_eq!(
        fs.actions(),
        vec![
            "mkdirall /srv/repos/app.git/hooks with mode 0o755",
            "create /srv/repos/app.git/config",
            "openfile /srv/repos/app.git/hooks/post-receive with mode 0o700",
            "open /srv/repos/app.git/hooks/post-receive",
        ]
    );
}

#[test]
fn removing_a_path_resets_its_buffer_to_the_default_content() {
    let fs = RecordingFileSystem::with_content("default");
    let mut file = fs.open(Path::new("/etc/motd")).unwrap();
    file.write_str("edited").unwrap();
    drop(file);

    fs.remove(Path::new("/etc/motd")).unwrap();
    assert_eq!(load_config(&fs, Path::new("/etc/motd")).unwrap(), "default");
}
