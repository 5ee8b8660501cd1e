//! Git commit, image and chart references

use crate::crd::{Chart, GitCommit, Image};
use crate::wire;

impl From<&wire::GitCommit> for GitCommit {
    fn from(g: &wire::GitCommit) -> Self {
        Self {
            repo_url: g.repo_url.clone(),
            id: g.id.clone(),
            branch: g.branch.clone(),
            health_check_commit: g.health_check_commit.clone().unwrap_or_default(),
            message: g.message.clone(),
            author: g.author.clone(),
        }
    }
}

impl From<&GitCommit> for wire::GitCommit {
    fn from(g: &GitCommit) -> Self {
        Self {
            repo_url: g.repo_url.clone(),
            id: g.id.clone(),
            branch: g.branch.clone(),
            // always present on egress, even when empty
            health_check_commit: Some(g.health_check_commit.clone()),
            message: g.message.clone(),
            author: g.author.clone(),
        }
    }
}

impl From<&wire::Image> for Image {
    fn from(i: &wire::Image) -> Self {
        Self {
            repo_url: i.repo_url.clone(),
            tag: i.tag.clone(),
        }
    }
}

impl From<&Image> for wire::Image {
    fn from(i: &Image) -> Self {
        Self {
            repo_url: i.repo_url.clone(),
            tag: i.tag.clone(),
        }
    }
}

impl From<&wire::Chart> for Chart {
    fn from(c: &wire::Chart) -> Self {
        Self {
            registry_url: c.registry_url.clone(),
            name: c.name.clone(),
            version: c.version.clone(),
        }
    }
}

impl From<&Chart> for wire::Chart {
    fn from(c: &Chart) -> Self {
        Self {
            registry_url: c.registry_url.clone(),
            name: c.name.clone(),
            version: c.version.clone(),
        }
    }
}
