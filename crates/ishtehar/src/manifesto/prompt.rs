use crate::wall::{PostSnapshot, PostStatus, PostType};

/// Returned without contacting the generator when nothing qualifies.
pub const INSUFFICIENT_DATA_MESSAGE: &str = "বিশ্লেষণ করার জন্য পর্যাপ্ত তথ্য নেই।";

/// Returned when the generator answers with no usable text.
pub const UNAVAILABLE_MESSAGE: &str = "দুঃখিত, এই মুহূর্তে ইশতেহার তৈরি করা যাচ্ছে না।";

/// Returned when the generator call fails for any reason.
pub const FAILURE_MESSAGE: &str =
    "ইশতেহার জেনারেশনে ত্রুটি হয়েছে। অনুগ্রহ করে পরে আবার চেষ্টা করুন।";

pub const SYSTEM_INSTRUCTION: &str =
    "You are a political analyst assisting in creating a manifesto for Bangladesh based on public input.";

/// Everything the generator needs for one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub prompt: String,
}

/// Renders approved text posts as `- [category] content` lines in store order.
/// Returns `None` when no post qualifies.
pub fn approved_text_lines(snapshot: &PostSnapshot) -> Option<String> {
    let lines: Vec<String> = snapshot
        .iter()
        .filter(|post| post.status == PostStatus::Approved && post.post_type == PostType::Text)
        .map(|post| format!("- [{}] {}", post.category.label(), post.content))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

pub fn build_request(opinions: &str) -> GenerationRequest {
    let prompt = format!(
        "নিচের তালিকাটি বাংলাদেশের সাধারণ জনগণের বিভিন্ন আকাঙ্ক্ষা ও দাবির তালিকা।\n\
         এই তথ্যগুলো বিশ্লেষণ করে একটি নির্বাচনী ইশতেহারের খসড়া তৈরি করুন।\n\
         মূল পয়েন্টগুলো বুলেট আকারে লিখুন এবং সেগুলোকে সুন্দর শিরোনামের অধীনে সাজান।\n\
         ভাষা: বাংলা।\n\n\
         জনগণের মতামত:\n{opinions}\n"
    );

    GenerationRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wall::{seed_posts, PostStore};
    use chrono::Utc;

    #[test]
    fn lines_include_only_approved_text_posts() {
        let store = PostStore::with_posts(seed_posts(Utc::now()));
        let lines = approved_text_lines(&store.snapshot()).expect("seed has approved text");

        let rendered: Vec<&str> = lines.lines().collect();
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].starts_with("- [কৃষি] কৃষকদের"));
        assert!(rendered[1].starts_with("- [শিক্ষা] শিক্ষা ব্যবস্থায়"));
    }

    #[test]
    fn no_lines_for_empty_store() {
        assert_eq!(approved_text_lines(&PostStore::new().snapshot()), None);
    }

    #[test]
    fn request_embeds_opinions() {
        let request = build_request("- [কৃষি] ন্যায্য মূল্য");
        assert_eq!(request.system_instruction, SYSTEM_INSTRUCTION);
        assert!(request.prompt.contains("জনগণের মতামত:\n- [কৃষি] ন্যায্য মূল্য"));
    }
}
