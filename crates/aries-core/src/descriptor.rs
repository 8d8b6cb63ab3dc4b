//! The Aries descriptor returned for a resolved identifier.
//!
//! Descriptors are assembled incrementally with [`DescriptorBuilder`] and
//! are immutable once built. Empty lists are omitted from the serialized
//! form rather than emitted as `[]`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of service a [`ServiceUrl`] points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    /// Direct image download.
    ImageDownload,
    /// IIIF presentation manifest.
    IiifPresentation,
}

impl Protocol {
    /// Returns the wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::ImageDownload => "image-download",
            Protocol::IiifPresentation => "iiif-presentation",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service endpoint tagged with its protocol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUrl {
    pub url: String,
    pub protocol: Protocol,
}

/// Normalized description of a resolved asset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AriesDescriptor {
    #[serde(rename = "identifier", default, skip_serializing_if = "Vec::is_empty")]
    identifiers: Vec<String>,
    #[serde(rename = "service_url", default, skip_serializing_if = "Vec::is_empty")]
    service_urls: Vec<ServiceUrl>,
    #[serde(rename = "access_url", default, skip_serializing_if = "Vec::is_empty")]
    access_urls: Vec<String>,
}

impl AriesDescriptor {
    /// Start assembling a descriptor.
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    /// Returns the known identifiers, internal ID first.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Returns the representation URLs with their protocol tags.
    pub fn service_urls(&self) -> &[ServiceUrl] {
        &self.service_urls
    }

    /// Returns the public view URLs.
    pub fn access_urls(&self) -> &[String] {
        &self.access_urls
    }
}

/// Incremental builder for [`AriesDescriptor`].
#[derive(Debug, Default)]
pub struct DescriptorBuilder {
    inner: AriesDescriptor,
}

impl DescriptorBuilder {
    /// Appends an identifier.
    pub fn identifier(&mut self, id: impl Into<String>) -> &mut Self {
        self.inner.identifiers.push(id.into());
        self
    }

    /// Appends a service URL; empty URLs are ignored.
    pub fn service_url(&mut self, url: impl Into<String>, protocol: Protocol) -> &mut Self {
        let url = url.into();
        if !url.is_empty() {
            self.inner.service_urls.push(ServiceUrl { url, protocol });
        }
        self
    }

    /// Appends a public view URL.
    pub fn access_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.inner.access_urls.push(url.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> AriesDescriptor {
        self.inner
    }
}
