//! The `quizkit init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizkit.toml
    if std::path::Path::new("quizkit.toml").exists() {
        println!("quizkit.toml already exists, skipping.");
    } else {
        std::fs::write("quizkit.toml", SAMPLE_CONFIG)?;
        println!("Created quizkit.toml");
    }

    // Create example curriculum
    let curriculum_path = std::path::Path::new(quizkit_loader::CURRICULUM_FILE);
    if curriculum_path.exists() {
        println!("{} already exists, skipping.", curriculum_path.display());
    } else {
        std::fs::write(curriculum_path, EXAMPLE_CURRICULUM)?;
        println!("Created {}", curriculum_path.display());
    }

    println!("\nNext steps:");
    println!("  1. Edit quizkit.toml to point base_url at your quiz site");
    println!("  2. Run: quizkit validate --curriculum grade-subjects.json");
    println!("  3. Run: quizkit subjects --grade 6th --file grade-subjects.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizkit configuration

base_url = "http://localhost:8080"
curriculum_path = "grade-subjects.json"
default_question_count = 10
# timeout_secs = 10
"#;

const EXAMPLE_CURRICULUM: &str = r#"{
  "6th": {
    "Mathematics": {
      "Number": {
        "Fractions": { "key_topics": ["equivalent fractions", "adding fractions", "mixed numbers"] },
        "Ratios": { "key_topics": ["unit rates", "ratio tables"] }
      },
      "Geometry": {
        "Area": { "key_topics": ["rectangles", "triangles", "composite shapes"] }
      }
    }
  },
  "7th": {
    "Mathematics": {
      "Algebra": {
        "Linear Equations": { "key_topics": ["one-step equations", "two-step equations"] }
      }
    },
    "Science": {
      "Biology": {
        "Cells": { "key_topics": ["cell membrane", "nucleus", "mitochondria"] }
      }
    }
  },
  "10th": {
    "Mathematics": {
      "Trigonometry": {
        "Ratios": { "key_topics": ["sine", "cosine", "tangent"] }
      }
    }
  }
}
"#;
