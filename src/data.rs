//! The authored content tables. Records are built once by `Catalog::load`
//! and never change at runtime; post bodies are embedded at compile time.

use crate::post::{BlogPost, Status};
use crate::project::{BuildingType, Project};
use crate::topic::Topic;

pub fn posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "parallel-reduction".to_string(),
            title: "Parallel Reduction".to_string(),
            subtitle: "Optimizing GPU kernels with two-stage warp reduction".to_string(),
            date: "November 25, 2025".to_string(),
            topic: Topic::Gpt2Cuda,
            author: "Minseob Shin".to_string(),
            status: Status::OnTime,
            content: include_str!("../content/posts/parallel-reduction.md").to_string(),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "meoow-processor".to_string(),
            title: "MeOoOw Processor".to_string(),
            description: "Out-of-Order Execution RISC Processor with superscalar architecture".to_string(),
            long_description: "Design and implement a superscalar Out-of-Order (OoO) RISC processor featuring explicit register renaming, dynamic scheduling, and reorder buffer (ROB) for high IPC and efficient instruction-level parallelism.\n\nVerified individual components through directed tests and constrained-random verification in SystemVerilog, leveraging the Synopsys toolchain for simulation, synthesis, waveform analysis, and timing closure.".to_string(),
            technologies: vec![
                "SystemVerilog".to_string(),
                "Computer Architecture".to_string(),
                "Microarchitecture".to_string(),
            ],
            period: "Sept 2025 – Present".to_string(),
            links: vec![],
            building_type: BuildingType::Modern,
            note: None,
        },
        Project {
            id: "gpt2-cuda".to_string(),
            title: "GPT-2 CUDA Acceleration".to_string(),
            description: "Custom CUDA kernels for GPT-2 inference optimization".to_string(),
            long_description: "Implement and optimize custom CUDA kernels for GPT-2 inference, applying various GPU optimizations such as shared memory tiling, memory coalescing, warp-level parallelism, and Tensor Core acceleration to achieve substantial speedups over CPU baselines.\n\nConduct detailed system-level and kernel-level profiling using NVIDIA Nsight Systems and Nsight Compute, identifying performance bottlenecks, memory stalls, and occupancy issues to guide iterative kernel optimization.\n\nAnalyze GPU memory hierarchies, occupancy, and execution divergence, gaining deep insight into transformer model performance characteristics on modern GPUs.".to_string(),
            technologies: vec![
                "CUDA".to_string(),
                "GPU Acceleration".to_string(),
                "Deep Learning".to_string(),
                "Nsight Systems".to_string(),
            ],
            period: "Sept 2025 – Present".to_string(),
            links: vec![],
            building_type: BuildingType::Industrial,
            note: None,
        },
        Project {
            id: "cosmos-os".to_string(),
            title: "CosmOS".to_string(),
            description: "Operating System built from scratch inspired by Unix V6".to_string(),
            long_description: "Collaborated in a team of three to develop core OS subsystems, including interrupt handling, user-level threading, and kernel/application paging, inspired by Unix Version 6.\n\nImplemented a custom, block-based filesystem with full CRUD functionality (create, read, update, delete) and a caching system for improved I/O performance.\n\nBuilt virtual memory management using the RISC-V Sv39 paging scheme, with lazy allocation and page fault handling to optimize memory utilization and process isolation.".to_string(),
            technologies: vec![
                "C".to_string(),
                "Operating Systems".to_string(),
                "RISC-V".to_string(),
                "Systems Programming".to_string(),
            ],
            period: "Jul 2025 – Aug 2025".to_string(),
            links: vec![],
            building_type: BuildingType::Classic,
            note: None,
        },
        Project {
            id: "music-synthesizer".to_string(),
            title: "Music Synthesizer".to_string(),
            description: "Real-time music synthesizer with HDMI output on FPGA".to_string(),
            long_description: "Designed and implemented a real-time music synthesizer and playback system on FPGA, supporting multi-track composition and HDMI-based visual feedback.\n\nDeveloped a custom embedded architecture utilizing BRAM to store multi-track note data, integrating keyboard input and on-screen note visualization to enable synchronized playback and an interactive, real-time composition experience.\n\nVerified correct functionality using the Xilinx Vivado waveform viewer and hardware logic analyzers, ensuring valid BRAM access, accurate HDMI timing, and glitch-free audio output.".to_string(),
            technologies: vec![
                "SystemVerilog".to_string(),
                "C".to_string(),
                "FPGA Design".to_string(),
                "Xilinx Vivado".to_string(),
            ],
            period: "Apr 2025 – May 2025".to_string(),
            links: vec![],
            building_type: BuildingType::Residential,
            note: None,
        },
    ]
}
