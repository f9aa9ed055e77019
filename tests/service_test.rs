//! Integration tests for the gRPC service.
//!
//! Starts an in-process spindled server and connects with a
//! [`ServiceClient`], validating the full round-trip through proto
//! conversions and the codec.

#![cfg(all(feature = "server", feature = "client"))]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tokio::net::TcpListener;
use tonic::transport::Server;

use spindle::client::ServiceClient;
use spindle::server::SpindleService;
use spindle::server::proto;
use spindle::server::proto::image_service_client::ImageServiceClient;
use spindle::server::proto::image_service_server::ImageServiceServer;
use spindle::{Rotation, SourceImage, SpindleError, codec};

/// Find an available port for testing.
async fn find_available_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Start a test server on a random port and return the address string.
async fn start_test_server() -> String {
    let addr = find_available_port().await;
    let addr_str = format!("http://{addr}");

    let server = ImageServiceServer::new(SpindleService::default());

    tokio::spawn(async move {
        Server::builder()
            .add_service(server)
            .serve(addr)
            .await
            .unwrap();
    });

    // Give the server a moment to bind.
    tokio::time::sleep(Duration::from_millis(100)).await;

    addr_str
}

/// A 2x1 test image: red on the left, blue on the right.
fn test_source() -> SourceImage {
    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(1, 0, Rgb([0, 0, 255]));
    SourceImage {
        image: DynamicImage::ImageRgb8(img),
        format: ImageFormat::Png,
        path: PathBuf::from("/tmp/test.png"),
    }
}

#[tokio::test]
async fn client_connects() {
    let addr = start_test_server().await;
    let client = ServiceClient::connect(&addr).await;
    assert!(client.is_ok(), "failed to connect: {:?}", client.err());
}

#[tokio::test]
async fn connect_to_dead_server_is_a_transport_error() {
    let result = ServiceClient::connect("http://127.0.0.1:1").await;
    assert!(matches!(result, Err(SpindleError::Transport(_))));
}

#[tokio::test]
async fn health_reports_version() {
    let addr = start_test_server().await;
    let mut client = ServiceClient::connect(&addr).await.unwrap();

    let (healthy, version) = client.health().await.unwrap();
    assert!(healthy);
    assert_eq!(version, spindle::PKG_VERSION);
}

#[tokio::test]
async fn rotate_90_round_trip() {
    let addr = start_test_server().await;
    let mut client = ServiceClient::connect(&addr).await.unwrap();

    let reply = client
        .rotate_image(&test_source(), Rotation::Ninety)
        .await
        .unwrap();

    assert_eq!((reply.width, reply.height), (1, 2));
    assert!(!reply.grayscale);

    let rotated = codec::decode(&reply.data).unwrap().to_rgb8();
    assert_eq!(*rotated.get_pixel(0, 0), Rgb([255, 0, 0]));
    assert_eq!(*rotated.get_pixel(0, 1), Rgb([0, 0, 255]));
}

#[tokio::test]
async fn rotate_none_echoes_dimensions() {
    let addr = start_test_server().await;
    let mut client = ServiceClient::connect(&addr).await.unwrap();

    let reply = client
        .rotate_image(&test_source(), Rotation::None)
        .await
        .unwrap();

    assert_eq!((reply.width, reply.height), (2, 1));
    let echoed = codec::decode(&reply.data).unwrap().to_rgb8();
    assert_eq!(*echoed.get_pixel(0, 0), Rgb([255, 0, 0]));
    assert_eq!(*echoed.get_pixel(1, 0), Rgb([0, 0, 255]));
}

#[tokio::test]
async fn rotated_file_lands_next_to_original() {
    let addr = start_test_server().await;
    let mut client = ServiceClient::connect(&addr).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.png");
    test_source()
        .image
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    // Same steps as the spindle binary: read, rotate remotely, write the
    // derived sibling.
    let source = codec::read_image(&path).unwrap();
    let reply = client.rotate_image(&source, Rotation::Ninety).await.unwrap();
    let rotated = codec::decode(&reply.data).unwrap();
    let output = spindle::naming::new_output_name(&source.path, &source.format_token());
    rotated.save_with_format(&output, source.format).unwrap();

    assert_eq!(output, dir.path().join("photo_rotated.png"));
    assert!(output.exists(), "derived file should be written");
    assert!(path.exists(), "original must not be clobbered");
}

#[tokio::test]
async fn undecodable_payload_is_rejected_as_invalid_input() {
    let addr = start_test_server().await;
    let mut raw = ImageServiceClient::connect(addr).await.unwrap();

    let request = proto::RotateRequest {
        rotation: proto::Rotation::NinetyDeg.into(),
        image: Some(proto::Image {
            grayscale: false,
            width: 2,
            height: 1,
            data: b"definitely not an image".to_vec(),
        }),
    };

    let status = raw.rotate_image(request).await.unwrap_err();
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
}

#[tokio::test]
async fn missing_image_is_rejected_as_invalid_input() {
    let addr = start_test_server().await;
    let mut raw = ImageServiceClient::connect(addr).await.unwrap();

    let request = proto::RotateRequest {
        rotation: proto::Rotation::None.into(),
        image: None,
    };

    let status = raw.rotate_image(request).await.unwrap_err();
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
}

#[tokio::test]
async fn unknown_rotation_enum_is_rejected() {
    let addr = start_test_server().await;
    let mut raw = ImageServiceClient::connect(addr).await.unwrap();

    let image = codec::encode(&test_source().image, ImageFormat::Png).unwrap();
    let request = proto::RotateRequest {
        rotation: 99,
        image: Some(proto::Image {
            grayscale: false,
            width: 2,
            height: 1,
            data: image,
        }),
    };

    let status = raw.rotate_image(request).await.unwrap_err();
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
}
