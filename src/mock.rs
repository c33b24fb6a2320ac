use rand::Rng;
use rand::seq::SliceRandom;

use crate::record::{AnalysisRecord, Sentiment};

struct MockTweet {
    username: &'static str,
    content: &'static str,
    summary: &'static str,
    sentiment: Sentiment,
    timestamp: &'static str,
}

impl MockTweet {
    fn to_record(&self) -> AnalysisRecord {
        AnalysisRecord {
            username: self.username.to_string(),
            content: self.content.to_string(),
            summary: self.summary.to_string(),
            sentiment: self.sentiment,
            timestamp: self.timestamp.to_string(),
        }
    }
}

const MOCK_TWEETS: &[MockTweet] = &[
    MockTweet {
        username: "@elifkaya",
        content: "Yeni projemizi bugün yayına aldık, emeği geçen herkese teşekkürler!",
        summary: "Kullanıcı yeni bir projenin yayına alındığını duyuruyor ve ekibine teşekkür ediyor.",
        sentiment: Sentiment::Positive,
        timestamp: "2024-05-12T09:14:00Z",
    },
    MockTweet {
        username: "@mehmet_dev",
        content: "Sabahtan beri internet yok, servis sağlayıcıdan hâlâ açıklama gelmedi.",
        summary: "Kullanıcı uzun süren internet kesintisinden ve yanıt alamamaktan şikayetçi.",
        sentiment: Sentiment::Negative,
        timestamp: "2024-05-13T11:02:00Z",
    },
    MockTweet {
        username: "@zeynepyildiz",
        content: "Bugün İstanbul'da hava parçalı bulutlu, akşam yağmur bekleniyor.",
        summary: "Kullanıcı İstanbul için günlük hava durumunu paylaşıyor.",
        sentiment: Sentiment::Neutral,
        timestamp: "2024-05-14T07:45:00Z",
    },
    MockTweet {
        username: "@canarslan",
        content: "Rust ile yazdığım ilk web servisi sonunda çalıştı, performans harika.",
        summary: "Kullanıcı Rust ile geliştirdiği servisin performansından memnun.",
        sentiment: Sentiment::Positive,
        timestamp: "2024-05-15T18:30:00Z",
    },
    MockTweet {
        username: "@ayse_t",
        content: "Sipariş ettiğim ürün üç haftadır kargoda, müşteri hizmetlerine ulaşmak imkansız.",
        summary: "Kullanıcı geciken kargo ve ulaşılamayan müşteri hizmetleri nedeniyle mağdur.",
        sentiment: Sentiment::Negative,
        timestamp: "2024-05-16T13:05:00Z",
    },
    MockTweet {
        username: "@burakoz",
        content: "Yarınki toplantı saat 10:00'a alındı, gündem maddeleri e-posta ile paylaşılacak.",
        summary: "Kullanıcı toplantı saatindeki değişikliği bildiriyor.",
        sentiment: Sentiment::Neutral,
        timestamp: "2024-05-17T16:20:00Z",
    },
];

/// Every record the selector can return
pub fn mock_records() -> Vec<AnalysisRecord> {
    MOCK_TWEETS.iter().map(MockTweet::to_record).collect()
}

/// Pick one mock record uniformly at random using `rng`
pub fn pick_record_with<R: Rng + ?Sized>(rng: &mut R) -> AnalysisRecord {
    MOCK_TWEETS
        .choose(rng)
        .map(MockTweet::to_record)
        // MOCK_TWEETS is a non-empty constant
        .unwrap_or_else(|| MOCK_TWEETS[0].to_record())
}

/// Pick one mock record with the thread-local RNG
pub fn pick_record() -> AnalysisRecord {
    let mut rng = rand::thread_rng();
    pick_record_with(&mut rng)
}
