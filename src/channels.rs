use std::collections::HashMap;

use crate::types::VideoRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSummary {
    pub name: String,
    pub count: usize,
}

/// Video count per author, busiest first. Ties keep the order in which the
/// authors first appear in `videos`.
pub fn aggregate(videos: &[VideoRecord]) -> Vec<ChannelSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut channels: Vec<ChannelSummary> = Vec::new();
    for v in videos {
        match index.get(v.author.as_str()) {
            Some(&i) => channels[i].count += 1,
            None => {
                index.insert(&v.author, channels.len());
                channels.push(ChannelSummary { name: v.author.clone(), count: 1 });
            }
        }
    }
    channels.sort_by(|a, b| b.count.cmp(&a.count));
    channels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by(author: &str) -> VideoRecord {
        VideoRecord {
            url: format!("https://www.youtube.com/watch?v={author}"),
            title: String::new(),
            author: author.into(),
            date: String::new(),
            duration: String::new(),
            status: String::new(),
            category: String::new(),
            favorite: false,
        }
    }

    #[test]
    fn groups_by_exact_author_name() {
        let videos = vec![by("b"), by("a"), by("B"), by("a"), by("c"), by("a"), by("c")];
        let got = aggregate(&videos);
        let summary: Vec<(&str, usize)> = got.iter().map(|c| (c.name.as_str(), c.count)).collect();
        assert_eq!(summary, [("a", 3), ("c", 2), ("b", 1), ("B", 1)]);
    }

    #[test]
    fn empty_list_has_no_channels() {
        assert!(aggregate(&[]).is_empty());
    }
}
