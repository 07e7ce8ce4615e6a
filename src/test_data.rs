#![cfg(test)]

use crate::post::{BlogPost, Status};
use crate::project::{BuildingType, Project};
use crate::topic::Topic;

pub fn sample_post(id: &str, topic: Topic) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: "Parallel Reduction".to_string(),
        subtitle: "Optimizing GPU kernels with two-stage warp reduction".to_string(),
        date: "November 25, 2025".to_string(),
        topic,
        author: "Minseob Shin".to_string(),
        status: Status::OnTime,
        content: "The reduction operator reduces the elements of an array into a single result.\n".to_string(),
    }
}

pub fn sample_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: "GPT-2 CUDA Acceleration".to_string(),
        description: "Custom CUDA kernels for GPT-2 inference optimization".to_string(),
        long_description: "Implement and optimize custom CUDA kernels for GPT-2 inference.\n\nConduct detailed system-level and kernel-level profiling.".to_string(),
        technologies: vec!["CUDA".to_string(), "GPU Acceleration".to_string()],
        period: "Sept 2025 – Present".to_string(),
        links: vec![],
        building_type: BuildingType::Industrial,
        note: None,
    }
}
