//! Built-in profile data. A TOML file passed via `--profile` can replace any
//! top-level field of this wholesale; see `load_profile`.

use crate::domain::{
    ContactMethod, Course, EducationEntry, ExperienceEntry, Hero, Profile, Project,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_profile() -> Profile {
    Profile {
        hero: Hero {
            name: "Priya Anand".to_string(),
            roles: strings(&[
                "Data Engineer",
                "Pipeline Architect",
                "ETL Optimizer",
                "Problem Solver",
                "Artistic Soul",
                "Writer",
                "Eternal Dreamer",
            ]),
            intro: strings(&[
                "I enjoy creating things that live on the Internet. With over four \
                 years of experience in data engineering, I bring a strong foundation \
                 in building efficient data solutions, and I'm currently pursuing a \
                 Master's in Computer Science to keep pushing the boundaries of \
                 what's possible.",
                "Believe your data deserves better engineering, or looking for an \
                 engineer who thinks beyond the pipeline? You are in the right \
                 place. Let's talk!",
            ]),
            resume_path: "assets/Priya_Anand_Resume.pdf".to_string(),
            email: "priya.anand.dev@gmail.com".to_string(),
            github_url: "https://github.com/priyabuilds".to_string(),
            linkedin_url: "https://www.linkedin.com/in/priyaanand-dev/".to_string(),
        },
        about: strings(&[
            "I'm a data engineer who likes the unglamorous parts of the job: the \
             schema nobody documented, the pipeline that fails at 3 a.m., the query \
             that should take seconds but takes an hour. Fixing those is where the \
             craft lives.",
            "Away from the keyboard I paint, write short fiction, and collect \
             fountain pens I absolutely do not need. I believe the habits that make \
             good art also make good software: patience, revision, and knowing when \
             to stop.",
            "Right now I'm finishing a Master's in Computer Science and looking for \
             a full-time data engineering role where the problems are messy and the \
             team cares about doing things well.",
        ]),
        experience: vec![
            ExperienceEntry {
                company: "Helios Analytics".to_string(),
                duration: "Oct 2018 - Dec 2022 (4 years 3 months)".to_string(),
                position: "Data Engineer".to_string(),
                location: "Hyderabad, India".to_string(),
                responsibilities: strings(&[
                    "Designed a data pipeline on AWS for an internal analytics \
                     platform, improving pipeline efficiency by 30% by pairing \
                     Lambda functions with scheduled triggers and tuning Glue jobs",
                    "Recommended cost-efficient patterns for data pipelines, cutting \
                     compute spend by 20%",
                    "Architected and deployed a serverless ingestion path using API \
                     Gateway, DynamoDB, and Lambda code shipped through S3",
                    "Reworked Spark workflows in PySpark and SQL to extract and \
                     process data from S3 buckets efficiently",
                    "Built quality checks and validation for pipeline configurations \
                     so downstream consumers could trust what they streamed",
                    "Modeled curated tables and views in Snowflake to match how the \
                     business actually queried the data",
                ]),
                is_current: false,
            },
            ExperienceEntry {
                company: "Crestline Industries".to_string(),
                duration: "May 2018 - Aug 2018 (4 months)".to_string(),
                position: "Software Development Intern".to_string(),
                location: "Hyderabad, India".to_string(),
                responsibilities: strings(&[
                    "Built an Android app that finds every relevant book for a \
                     photographed author name using optical character recognition",
                    "Reached 90% end-to-end accuracy by combining the extracted text \
                     with book-search APIs",
                    "Maintained and supported a real-time traffic monitoring project",
                ]),
                is_current: false,
            },
            ExperienceEntry {
                company: "Kamala Institute of Technology".to_string(),
                duration: "Aug 2016 - Oct 2017 (1 year 3 months)".to_string(),
                position: "Student Technical Assistant".to_string(),
                location: "Warangal, India".to_string(),
                responsibilities: strings(&[
                    "Led a technical team of 16 through the campus placement season",
                    "Coordinated with 800+ students, faculty, and recruiters to keep \
                     placement activities running smoothly",
                    "Configured software and network resources for 50+ workstations \
                     used in coding rounds",
                    "Provided in-person troubleshooting with a 95% satisfaction rate",
                ]),
                is_current: false,
            },
        ],
        education: vec![
            EducationEntry {
                institution: "Meridian University".to_string(),
                duration: "Aug 2023 - May 2025 (Expected)".to_string(),
                degree: "Master of Science".to_string(),
                major: "Computer Science".to_string(),
                location: "Washington, DC".to_string(),
                courses: vec![
                    Course {
                        name: "Machine Learning".to_string(),
                        description: "Learning algorithms, neural networks, and \
                                      practical applications"
                            .to_string(),
                    },
                    Course {
                        name: "Big Data & Analytics".to_string(),
                        description: "Batch and stream processing frameworks and \
                                      data visualization"
                            .to_string(),
                    },
                    Course {
                        name: "Design & Analysis of Algorithms".to_string(),
                        description: "Algorithm design techniques, complexity \
                                      analysis, and optimization"
                            .to_string(),
                    },
                    Course {
                        name: "Cloud Computing".to_string(),
                        description: "Cloud architecture, managed services, and \
                                      deployment strategies"
                            .to_string(),
                    },
                    Course {
                        name: "Database Systems II".to_string(),
                        description: "Distributed databases and query optimization"
                            .to_string(),
                    },
                ],
                is_current: true,
            },
            EducationEntry {
                institution: "Kamala Institute of Technology".to_string(),
                duration: "Aug 2014 - May 2018".to_string(),
                degree: "Bachelor of Technology".to_string(),
                major: "Computer Science and Engineering".to_string(),
                location: "Warangal, India".to_string(),
                courses: vec![
                    Course {
                        name: "Data Structures & Algorithms".to_string(),
                        description: "Core data structures, algorithm design, and \
                                      complexity analysis"
                            .to_string(),
                    },
                    Course {
                        name: "Operating Systems".to_string(),
                        description: "Process management, memory management, and \
                                      system programming"
                            .to_string(),
                    },
                    Course {
                        name: "Computer Networks".to_string(),
                        description: "Network protocols, architecture, and \
                                      distributed systems"
                            .to_string(),
                    },
                    Course {
                        name: "Data Warehousing & Mining".to_string(),
                        description: "Warehouse architecture, ETL processes, and \
                                      mining techniques"
                            .to_string(),
                    },
                ],
                is_current: false,
            },
        ],
        skills: strings(&[
            "Python",
            "SQL",
            "AWS",
            "Spark",
            "PySpark",
            "Airflow",
            "Snowflake",
            "Databricks",
            "ETL",
            "Data Warehousing",
            "Docker",
            "Kubernetes",
            "Git",
            "Jenkins",
            "Data Modeling",
            "Big Data",
            "Hadoop",
            "Rust",
            "Machine Learning",
            "Data Analytics",
            "Shell Scripting",
            "Linux",
            "CI/CD",
            "Lambda",
            "Redshift",
            "Glue",
            "MongoDB",
            "R",
        ]),
        projects: vec![
            Project {
                title: "Retail Sales Prediction with Random Forests".to_string(),
                description: "Machine-learning model for retail sales forecasting \
                              over a dataset of 14,000+ entries with twelve product \
                              and outlet attributes, built to support inventory and \
                              revenue planning decisions."
                    .to_string(),
                technologies: strings(&[
                    "Python",
                    "Scikit-learn",
                    "Pandas",
                    "NumPy",
                    "Matplotlib",
                ]),
                github_url: Some("https://github.com/priyabuilds/retail-sales-forest".to_string()),
                live_url: None,
                category: "Machine Learning".to_string(),
            },
            Project {
                title: "Trust Network Graph Analytics".to_string(),
                description: "Graph analysis of a 10M-node trust network: custom \
                              power-centrality, clique, and random-walk metrics to \
                              surface community patterns, with the results distilled \
                              into visual summaries."
                    .to_string(),
                technologies: strings(&["R", "igraph", "sna", "ggplot2", "tidyverse"]),
                github_url: Some(
                    "https://github.com/priyabuilds/trust-graph-analytics".to_string(),
                ),
                live_url: None,
                category: "Data Analytics".to_string(),
            },
            Project {
                title: "CISC Computer Simulator".to_string(),
                description: "Assembly-level simulator of a modest classical CISC \
                              machine: simple memory and load/store instructions \
                              first, then a cache module, floating-point and vector \
                              operations, and branch prediction."
                    .to_string(),
                technologies: strings(&[
                    "Assembly",
                    "Java",
                    "Computer Architecture",
                    "Memory Management",
                ]),
                github_url: Some("https://github.com/priyabuilds/cisc-simulator".to_string()),
                live_url: None,
                category: "Systems Programming".to_string(),
            },
        ],
        contact: vec![
            ContactMethod {
                title: "Email".to_string(),
                value: "priya.anand.dev@gmail.com".to_string(),
                link: Some("mailto:priya.anand.dev@gmail.com".to_string()),
                description: "Send me an email anytime!".to_string(),
            },
            ContactMethod {
                title: "LinkedIn".to_string(),
                value: "linkedin.com/in/priyaanand-dev".to_string(),
                link: Some("https://www.linkedin.com/in/priyaanand-dev/".to_string()),
                description: "Let's connect professionally".to_string(),
            },
            ContactMethod {
                title: "GitHub".to_string(),
                value: "github.com/priyabuilds".to_string(),
                link: Some("https://github.com/priyabuilds".to_string()),
                description: "Check out my code repositories".to_string(),
            },
            ContactMethod {
                title: "Location".to_string(),
                value: "Arlington, Virginia".to_string(),
                link: None,
                description: "Available for local & remote opportunities".to_string(),
            },
        ],
    }
}
