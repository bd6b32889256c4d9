use common::media::MediaStore;
use futures::future::join_all;
use tracing::warn;

use crate::generation::{GeneratedImage, Generator};
use crate::handlers::media::media_path;

/// The settled result of one personalization run.
///
/// `slots` is index-aligned with the reference image list that produced it:
/// slot *i* holds the outcome of the request issued for reference *i*, and
/// only that request.
#[derive(Debug, PartialEq)]
pub struct TryOnOutcome {
    pub slots: Vec<Option<String>>,
    pub succeeded: usize,
}

/// Fan out one generation request per reference image and wait for all of
/// them to settle.
///
/// Requests are issued concurrently and are fully independent: a failure in
/// one resolves its own slot to empty and never cancels or blocks siblings.
/// Failures are logged here and reported only in aggregate. No retries, no
/// orchestrator-level timeout.
pub async fn run(
    generator: &dyn Generator,
    media: &MediaStore,
    user_image: &[u8],
    references: &[String],
    product_type: &str,
) -> TryOnOutcome {
    if references.is_empty() {
        return TryOnOutcome {
            slots: Vec::new(),
            succeeded: 0,
        };
    }

    let requests = references.iter().enumerate().map(|(index, reference)| {
        async move {
            match generator.generate(user_image, reference, product_type).await {
                Ok(Some(image)) => Some(resolve(media, image)),
                Ok(None) => {
                    warn!(index, "Generation response contained no usable image reference");
                    None
                }
                Err(e) => {
                    warn!(index, error = %e, "Generation request failed");
                    None
                }
            }
        }
    });

    // join_all preserves submission order, which is what keeps slot i bound
    // to reference i regardless of completion order.
    let slots: Vec<Option<String>> = join_all(requests).await;
    let succeeded = slots.iter().filter(|slot| slot.is_some()).count();

    TryOnOutcome { slots, succeeded }
}

/// Turn a generation result into a displayable reference, parking raw image
/// bodies in the media store.
fn resolve(media: &MediaStore, image: GeneratedImage) -> String {
    match image {
        GeneratedImage::Url(url) => url,
        GeneratedImage::Binary {
            bytes,
            content_type,
        } => media_path(media.insert(bytes, content_type)),
    }
}
