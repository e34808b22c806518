//! Integration tests for the gallery commands

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::{init_site, site_cmd};

fn photo_ids(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.starts_with(' '))
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect()
}

fn list(site: &std::path::Path) -> Vec<u8> {
    site_cmd(site)
        .args(["gallery", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone()
}

#[test]
fn test_list_default_gallery() {
    let site = init_site();
    assert_eq!(
        photo_ids(&list(site.path())),
        vec!["g1", "g2", "g3", "g4", "g5", "g6"]
    );
}

#[test]
fn test_add_photo_is_first_and_prefixed() {
    let site = init_site();

    site_cmd(site.path())
        .args(["gallery", "add", "--url", "http://x/y.jpg", "--caption", "Test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added photo g"));

    let output = list(site.path());
    let ids = photo_ids(&output);
    assert_eq!(ids.len(), 7);
    assert!(ids[0].starts_with('g'));
    assert_ne!(ids[0], "g1");

    let text = String::from_utf8(output).unwrap();
    assert!(text.lines().next().unwrap().ends_with("Test"));
    assert!(text.contains("http://x/y.jpg"));
}

#[test]
fn test_add_photo_rejects_blank_caption() {
    let site = init_site();

    site_cmd(site.path())
        .args(["gallery", "add", "--url", "http://x/y.jpg", "--caption", ""])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("caption"));

    assert_eq!(photo_ids(&list(site.path())).len(), 6);
}

#[test]
fn test_remove_photo() {
    let site = init_site();

    site_cmd(site.path())
        .args(["gallery", "remove", "g4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marathon Finish Line"));

    assert_eq!(
        photo_ids(&list(site.path())),
        vec!["g1", "g2", "g3", "g5", "g6"]
    );

    site_cmd(site.path())
        .args(["gallery", "remove", "g4"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("samawarun gallery list"));
}

#[test]
fn test_gallery_has_no_edit_command() {
    let site = init_site();

    site_cmd(site.path())
        .args(["gallery", "edit", "g1", "--caption", "x"])
        .assert()
        .failure();
}
