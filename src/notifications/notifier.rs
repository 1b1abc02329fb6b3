//! Posting of the scheduled notifications.
//!
//! Each [`Notification`] runs in its own task: it sleeps until its next
//! firing time, reads the tracker, then posts an embed to the configured
//! channel. A failure is logged and the task waits for the next firing.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc, Weekday};
use log::{debug, error, info, warn};
use serenity::{http::Http, model::id::ChannelId};
use tokio::{task::JoinHandle, time};

use crate::{
    commands::Reply,
    discord::embed::create_message,
    notifications::{
        messages::{
            format_log_reminder, format_monthly_wishlist, format_morning_reminder,
            format_stale_items, format_weekly_report,
        },
        schedule::Schedule,
    },
    sheets::{Requester, SheetsBackend, SheetsError},
    tracker::{
        Category, Status, Tracker,
        stats::{period_stats, stale_items, week_start},
    },
};

/// Age in days after which a wanted movie or a planned activity is stale.
const STALE_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Books being read and the reading pile
    MorningReminder,
    /// Books to buy, on the first day of the month
    MonthlyWishlist,
    /// Invitation to record reports
    LogReminder,
    /// Completions of the week, on Sunday evening
    WeeklyReport,
    /// Movies and activities waiting for more than a week
    StaleItems,
}

impl Notification {
    pub const ALL: [Notification; 5] = [
        Notification::MorningReminder,
        Notification::MonthlyWishlist,
        Notification::LogReminder,
        Notification::WeeklyReport,
        Notification::StaleItems,
    ];

    pub fn schedule(&self) -> Schedule {
        match self {
            Notification::MorningReminder => Schedule::Daily { hour: 7, minute: 0 },
            Notification::MonthlyWishlist => Schedule::Monthly {
                day: 1,
                hour: 8,
                minute: 0,
            },
            Notification::LogReminder => Schedule::Daily { hour: 20, minute: 0 },
            Notification::WeeklyReport => Schedule::Weekly {
                weekday: Weekday::Sun,
                hour: 21,
                minute: 0,
            },
            Notification::StaleItems => Schedule::Daily { hour: 21, minute: 0 },
        }
    }

    /// Builds the notification at `now`.
    ///
    /// Returns `None` when there is nothing worth posting.
    pub async fn build<R: Requester>(
        &self,
        tracker: &Tracker<R>,
        now: DateTime<FixedOffset>,
    ) -> Result<Option<Reply>, SheetsError> {
        let today = now.date_naive();

        let embed = match self {
            Notification::MorningReminder => {
                let books = tracker.items(Category::Book).await?;
                let with_status = |status: Status| -> Vec<_> {
                    books.iter().filter(|b| b.status == status).cloned().collect()
                };
                let (reading, pile) = (with_status(Status::Reading), with_status(Status::WantToRead));
                if reading.is_empty() && pile.is_empty() {
                    return Ok(None);
                }
                format_morning_reminder(&reading, &pile)
            }
            Notification::MonthlyWishlist => {
                let wishlist: Vec<_> = tracker
                    .items(Category::Book)
                    .await?
                    .into_iter()
                    .filter(|b| b.status == Status::WantToBuy)
                    .collect();
                if wishlist.is_empty() {
                    return Ok(None);
                }
                format_monthly_wishlist(&wishlist)
            }
            Notification::LogReminder => format_log_reminder(),
            Notification::WeeklyReport => {
                let items = tracker.all_items().await?;
                let reports = tracker.reports().await?;
                format_weekly_report(&period_stats(&items, &reports, week_start(today), today))
            }
            Notification::StaleItems => {
                let items = tracker
                    .items_of(&[Category::Movie, Category::Activity])
                    .await?;
                let local_now = now.naive_local();
                let movies = stale_items(&items, Status::WantToWatch, local_now, STALE_DAYS);
                let activities = stale_items(&items, Status::Planned, local_now, STALE_DAYS);
                if movies.is_empty() && activities.is_empty() {
                    return Ok(None);
                }
                format_stale_items(&movies, &activities)
            }
        };

        Ok(Some(Reply::Embed(embed.timestamp(now))))
    }
}

/// Posts the notifications to a channel.
pub struct Notifier {
    tracker: Arc<Tracker<SheetsBackend>>,
    channel_id: ChannelId,
    offset: FixedOffset,
}

impl Notifier {
    pub fn new(tracker: Arc<Tracker<SheetsBackend>>, channel_id: u64, offset: FixedOffset) -> Self {
        Notifier {
            tracker,
            channel_id: ChannelId::new(channel_id),
            offset,
        }
    }

    /// Spawns one task per notification.
    pub fn start(self: &Arc<Self>, http: Arc<Http>) -> Vec<JoinHandle<()>> {
        info!(
            "posting notifications to channel {} at UTC{}",
            self.channel_id, self.offset
        );

        Notification::ALL
            .into_iter()
            .map(|notification| {
                let notifier = Arc::clone(self);
                let http = Arc::clone(&http);
                tokio::spawn(async move { notifier.run(notification, http).await })
            })
            .collect()
    }

    async fn run(&self, notification: Notification, http: Arc<Http>) {
        loop {
            let now = Utc::now().with_timezone(&self.offset);
            let Some(next) = notification.schedule().next_after(now) else {
                warn!("{:?} never fires, stopping it", notification);
                return;
            };

            debug!("next {:?} at {}", notification, next);
            let wait = (next - now).to_std().unwrap_or_default();
            time::sleep(wait).await;

            self.post(notification, &http, next).await;
        }
    }

    async fn post(&self, notification: Notification, http: &Http, now: DateTime<FixedOffset>) {
        let reply = match notification.build(&*self.tracker, now).await {
            Ok(Some(reply)) => reply,
            Ok(None) => {
                debug!("nothing to post for {:?}", notification);
                return;
            }
            Err(e) => {
                error!("failed to build {:?}: {}", notification, e);
                return;
            }
        };

        match self.channel_id.send_message(http, create_message(&reply)).await {
            Ok(_) => info!("posted {:?}", notification),
            Err(e) => error!("failed to post {:?}: {}", notification, e),
        }
    }
}
