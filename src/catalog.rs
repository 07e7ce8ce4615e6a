use std::collections::HashMap;
use std::io;
use std::io::ErrorKind;

use crate::data;
use crate::post::BlogPost;
use crate::project::Project;
use crate::text_utils::{is_url_safe, parse_display_date};
use crate::topic::Topic;

/// The content catalog: every post and project, in authored order, with
/// id indices for lookups.
///
/// Built once by `Catalog::load` and read-only afterwards. Queries borrow
/// from it, so concurrent readers need no locking.
#[derive(Debug)]
pub struct Catalog {
    posts: Vec<BlogPost>,
    projects: Vec<Project>,
    // id -> position in the vectors above
    post_index: HashMap<String, usize>,
    project_index: HashMap<String, usize>,
}

impl Catalog {
    /// Loads the built-in content tables, validating every record.
    /// A malformed record is an authoring defect and fails the whole load.
    pub fn load() -> io::Result<Catalog> {
        Catalog::from_records(data::posts(), data::projects())
    }

    pub fn from_records(posts: Vec<BlogPost>, projects: Vec<Project>) -> io::Result<Catalog> {
        let mut post_index = HashMap::new();
        for (pos, post) in posts.iter().enumerate() {
            validate_post(post)?;
            // Duplicate ids are rejected rather than letting one record
            // shadow the other
            if post_index.insert(post.id.clone(), pos).is_some() {
                return Err(io::Error::new(
                    ErrorKind::InvalidData, format!("Duplicate post id {}", post.id)));
            }
        }

        let mut project_index = HashMap::new();
        for (pos, project) in projects.iter().enumerate() {
            validate_project(project)?;
            if project_index.insert(project.id.clone(), pos).is_some() {
                return Err(io::Error::new(
                    ErrorKind::InvalidData, format!("Duplicate project id {}", project.id)));
            }
        }

        Ok(Catalog {
            posts,
            projects,
            post_index,
            project_index,
        })
    }

    /// Full post listing, in authored order.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Full project listing, in authored order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Posts whose topic matches exactly, keeping authored order.
    /// `Topic::All` means no filter. An empty result is a normal outcome.
    pub fn posts_by_topic(&self, topic: Topic) -> Vec<&BlogPost> {
        self.posts.iter()
            .filter(|post| topic == Topic::All || post.topic == topic)
            .collect()
    }

    /// Lookup by id. A miss is `None`, never an error - the caller decides
    /// how to present absence.
    pub fn post_by_id(&self, id: &str) -> Option<&BlogPost> {
        match self.post_index.get(id) {
            None => None,
            Some(&pos) => Some(&self.posts[pos]),
        }
    }

    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        match self.project_index.get(id) {
            None => None,
            Some(&pos) => Some(&self.projects[pos]),
        }
    }
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, msg)
}

fn validate_post(post: &BlogPost) -> io::Result<()> {
    if !is_url_safe(&post.id) {
        return Err(invalid(format!("Post id is not url-safe: {:?}", post.id)));
    }
    if post.title.is_empty() || post.subtitle.is_empty() || post.author.is_empty() {
        return Err(invalid(format!("Post {} has an empty display field", post.id)));
    }
    if post.topic == Topic::All {
        return Err(invalid(format!("Post {} uses the All filter sentinel as its topic", post.id)));
    }
    if let Err(e) = parse_display_date(&post.date) {
        return Err(invalid(format!("{} - post={}", e, post.id)));
    }
    Ok(())
}

fn validate_project(project: &Project) -> io::Result<()> {
    if !is_url_safe(&project.id) {
        return Err(invalid(format!("Project id is not url-safe: {:?}", project.id)));
    }
    if project.title.is_empty() || project.description.is_empty() {
        return Err(invalid(format!("Project {} has an empty display field", project.id)));
    }
    for link in project.links.iter() {
        if link.label.is_empty() || link.url.is_empty() {
            return Err(invalid(format!("Project {} has a link with an empty label or url", project.id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_data::{sample_post, sample_project};

    use super::*;

    fn test_catalog() -> Catalog {
        let posts = vec![
            sample_post("parallel-reduction", Topic::Gpt2Cuda),
            sample_post("boarding-now", Topic::Personal),
            sample_post("occupancy-notes", Topic::Gpt2Cuda),
        ];
        let projects = vec![
            sample_project("meoow-processor"),
            sample_project("gpt2-cuda"),
            sample_project("cosmos-os"),
            sample_project("music-synthesizer"),
        ];
        Catalog::from_records(posts, projects).unwrap()
    }

    #[test]
    fn test_load_builtin_tables() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.posts().len(), 1);
        assert_eq!(catalog.posts()[0].id, "parallel-reduction");

        let ids: Vec<&str> = catalog.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["meoow-processor", "gpt2-cuda", "cosmos-os", "music-synthesizer"]);
    }

    #[test]
    fn test_filter_by_topic() {
        let catalog = test_catalog();

        let cuda = catalog.posts_by_topic(Topic::Gpt2Cuda);
        let ids: Vec<&str> = cuda.iter().map(|p| p.id.as_str()).collect();
        // Stable subsequence of the authored order
        assert_eq!(ids, ["parallel-reduction", "occupancy-notes"]);
        assert!(cuda.iter().all(|p| p.topic == Topic::Gpt2Cuda));

        // No posts in this category is a valid empty result
        assert!(catalog.posts_by_topic(Topic::CosmOs).is_empty());
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let catalog = test_catalog();
        let all = catalog.posts_by_topic(Topic::All);
        assert_eq!(all.len(), catalog.posts().len());
        for (got, want) in all.iter().zip(catalog.posts().iter()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = test_catalog();
        let post = catalog.post_by_id("parallel-reduction").unwrap();
        assert_eq!(post.id, "parallel-reduction");

        assert!(catalog.post_by_id("does-not-exist").is_none());

        let project = catalog.project_by_id("cosmos-os").unwrap();
        assert_eq!(project.id, "cosmos-os");
        assert!(catalog.project_by_id("missing").is_none());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let catalog = test_catalog();
        let first: Vec<&str> = catalog.posts_by_topic(Topic::Gpt2Cuda)
            .iter().map(|p| p.id.as_str()).collect();
        let second: Vec<&str> = catalog.posts_by_topic(Topic::Gpt2Cuda)
            .iter().map(|p| p.id.as_str()).collect();
        assert_eq!(first, second);
        assert_eq!(catalog.post_by_id("boarding-now").unwrap().id,
                   catalog.post_by_id("boarding-now").unwrap().id);
    }

    #[test]
    fn test_duplicate_post_id_rejected() {
        let posts = vec![
            sample_post("parallel-reduction", Topic::Gpt2Cuda),
            sample_post("parallel-reduction", Topic::Personal),
        ];
        let err = Catalog::from_records(posts, vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let projects = vec![
            sample_project("gpt2-cuda"),
            sample_project("gpt2-cuda"),
        ];
        let err = Catalog::from_records(vec![], projects).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_all_sentinel_rejected_as_record_topic() {
        let posts = vec![sample_post("filter-trap", Topic::All)];
        let err = Catalog::from_records(posts, vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_record_with_links_and_note_is_valid() {
        let mut project = sample_project("music-synthesizer");
        project.links.push(crate::project::ProjectLink {
            label: "Demo".to_string(),
            url: "https://example.com/synth-demo".to_string(),
        });
        project.note = Some("Hardware demo available on request".to_string());

        let catalog = Catalog::from_records(vec![], vec![project]).unwrap();
        let found = catalog.project_by_id("music-synthesizer").unwrap();
        assert_eq!(found.links.len(), 1);
        assert_eq!(found.note.as_deref(), Some("Hardware demo available on request"));
    }

    #[test]
    fn test_malformed_records_rejected() {
        let mut post = sample_post("bad date", Topic::Personal);
        post.id = "bad-date".to_string();
        post.date = "25/11/2025".to_string();
        assert!(Catalog::from_records(vec![post], vec![]).is_err());

        let mut post = sample_post("no-title", Topic::Personal);
        post.title = "".to_string();
        assert!(Catalog::from_records(vec![post], vec![]).is_err());

        let post = sample_post("not url safe", Topic::Personal);
        assert!(Catalog::from_records(vec![post], vec![]).is_err());

        let mut project = sample_project("bad-link");
        project.links.push(crate::project::ProjectLink {
            label: "Source".to_string(),
            url: "".to_string(),
        });
        assert!(Catalog::from_records(vec![], vec![project]).is_err());
    }
}
