//! The builtin node type table.
//!
//! This is compiled-in configuration, not an extension point: the
//! execution backend only understands these operations, so the table
//! changes in lockstep with it.

/// One row of the builtin table.
/// All-static cousin of [`NodeTypeDescriptor`](crate::NodeTypeDescriptor).
#[derive(Debug, Clone, Copy)]
pub struct BuiltinNodeType {
	pub id: &'static str,
	pub display_name: &'static str,
	pub arguments: &'static [&'static str],
	pub outputs: &'static [&'static str],
	pub models: &'static [&'static str],
}

pub static BUILTIN_NODE_TYPES: &[BuiltinNodeType] = &[
	BuiltinNodeType {
		id: "AudioTextToText",
		display_name: "Audio to Text",
		arguments: &["audio"],
		outputs: &["text"],
		models: &["Whisper", "Google Cloud Speech-to-Text", "AssemblyAI"],
	},
	BuiltinNodeType {
		id: "ImageTextToText",
		display_name: "Image to Text",
		arguments: &["image"],
		outputs: &["text"],
		models: &["CLIP", "BLIP", "Vision Transformer"],
	},
	BuiltinNodeType {
		id: "VisualQuestionAnswering",
		display_name: "Visual Question Answering",
		arguments: &["image", "question"],
		outputs: &["answer"],
		models: &["VQAv2 Model", "ViLT", "VisualBERT"],
	},
	BuiltinNodeType {
		id: "DocumentQuestionAnswering",
		display_name: "Document Question Answering",
		arguments: &["document", "question"],
		outputs: &["answer"],
		models: &["LayoutLM", "Donut", "TAPAS"],
	},
	BuiltinNodeType {
		id: "VideoTextToText",
		display_name: "Video to Text",
		arguments: &["video"],
		outputs: &["text"],
		models: &["VideoCLIP", "TimeSformer", "MSR-VTT"],
	},
	BuiltinNodeType {
		id: "VisualDocumentRetrieval",
		display_name: "Visual Document Retrieval",
		arguments: &["query_image", "document_database"],
		outputs: &["relevant_documents"],
		models: &["CLIP Retrieval", "Image-Text Embedding Model"],
	},
	BuiltinNodeType {
		id: "AnyToAny",
		display_name: "Any to Any",
		arguments: &["input"],
		outputs: &["output"],
		models: &["Generic Model"],
	},
	BuiltinNodeType {
		id: "DepthEstimation",
		display_name: "Depth Estimation",
		arguments: &["image"],
		outputs: &["depth_map"],
		models: &["MiDaS", "DepthFormer", "ManyDepth"],
	},
	BuiltinNodeType {
		id: "ImageClassification",
		display_name: "Image Classification",
		arguments: &["image"],
		outputs: &["labels"],
		models: &["ResNet", "EfficientNet", "MobileNetV2"],
	},
	BuiltinNodeType {
		id: "ObjectDetection",
		display_name: "Object Detection",
		arguments: &["image"],
		outputs: &["bounding_boxes", "labels"],
		models: &["YOLOv5", "Faster R-CNN", "SSD"],
	},
	BuiltinNodeType {
		id: "ImageSegmentation",
		display_name: "Image Segmentation",
		arguments: &["image"],
		outputs: &["segmentation_mask"],
		models: &["U-Net", "DeepLab", "Mask R-CNN"],
	},
	BuiltinNodeType {
		id: "TextToImage",
		display_name: "Text to Image",
		arguments: &["text_prompt"],
		outputs: &["image"],
		models: &["Stable Diffusion", "DALL-E 2", "Imagen"],
	},
	BuiltinNodeType {
		id: "ImageToText",
		display_name: "Image to Text",
		arguments: &["image"],
		outputs: &["text_description"],
		models: &["BLIP", "CLIP", "Vision Transformer"],
	},
	BuiltinNodeType {
		id: "ImageToImage",
		display_name: "Image to Image",
		arguments: &["input_image", "style_image"],
		outputs: &["output_image"],
		models: &["StyleGAN", "GauGAN", "CycleGAN"],
	},
	BuiltinNodeType {
		id: "ImageToVideo",
		display_name: "Image to Video",
		arguments: &["image"],
		outputs: &["video"],
		models: &["ModelScope Text-to-Video", "RunwayML Gen-1", "Pika Labs"],
	},
	BuiltinNodeType {
		id: "UnconditionalImageGeneration",
		display_name: "Unconditional Image Generation",
		arguments: &[],
		outputs: &["image"],
		models: &["GAN", "VQ-VAE", "Autoregressive Models"],
	},
	BuiltinNodeType {
		id: "VideoClassification",
		display_name: "Video Classification",
		arguments: &["video"],
		outputs: &["labels"],
		models: &["3D-ResNet", "SlowFast Networks", "Timesformer"],
	},
	BuiltinNodeType {
		id: "TextToVideo",
		display_name: "Text to Video",
		arguments: &["text_prompt"],
		outputs: &["video"],
		models: &["Make-A-Video", "Imagen Video", "Phenaki"],
	},
	BuiltinNodeType {
		id: "ZeroShotImageClassification",
		display_name: "Zero-Shot Image Classification",
		arguments: &["image", "candidate_labels"],
		outputs: &["predicted_label"],
		models: &["CLIP", "VL-BERT", "DeViL"],
	},
	BuiltinNodeType {
		id: "MaskGeneration",
		display_name: "Mask Generation",
		arguments: &["image"],
		outputs: &["mask"],
		models: &[
			"SAM (Segment Anything Model)",
			"DeepMask",
			"Boundary-preserving Mask R-CNN",
		],
	},
	BuiltinNodeType {
		id: "ZeroShotObjectDetection",
		display_name: "Zero-Shot Object Detection",
		arguments: &["image", "classes_to_detect"],
		outputs: &["detected_objects"],
		models: &["OWL-ViT", "Detic", "GLIP"],
	},
	BuiltinNodeType {
		id: "TextTo3D",
		display_name: "Text to 3D",
		arguments: &["text_prompt"],
		outputs: &["3d_model"],
		models: &["Point-E", "DreamFusion", "Magic3D"],
	},
	BuiltinNodeType {
		id: "ImageTo3D",
		display_name: "Image to 3D",
		arguments: &["image"],
		outputs: &["3d_model"],
		models: &["Neural Radiance Fields (NeRF)", "Mesh R-CNN", "Pixel2Mesh"],
	},
	BuiltinNodeType {
		id: "ImageFeatureExtraction",
		display_name: "Image Feature Extraction",
		arguments: &["image"],
		outputs: &["image_features"],
		models: &["ResNet", "VGG", "EfficientNet"],
	},
	BuiltinNodeType {
		id: "KeypointDetection",
		display_name: "Keypoint Detection",
		arguments: &["image"],
		outputs: &["keypoints"],
		models: &["OpenPose", "HRNet", "Simple Baselines"],
	},
	BuiltinNodeType {
		id: "TextClassification",
		display_name: "Text Classification",
		arguments: &["text"],
		outputs: &["label"],
		models: &["BERT", "RoBERTa", "DistilBERT"],
	},
	BuiltinNodeType {
		id: "TokenClassification",
		display_name: "Token Classification",
		arguments: &["text"],
		outputs: &["tokens_with_labels"],
		models: &["BERT-CRF", "Flair", "SpaCy"],
	},
	BuiltinNodeType {
		id: "TableQuestionAnswering",
		display_name: "Table Question Answering",
		arguments: &["table", "question"],
		outputs: &["answer"],
		models: &["TAPAS", "Table-BERT", "SQLNet"],
	},
	BuiltinNodeType {
		id: "QuestionAnswering",
		display_name: "Question Answering",
		arguments: &["context_text", "question"],
		outputs: &["answer"],
		models: &["BERT", "RoBERTa", "ELECTRA"],
	},
	BuiltinNodeType {
		id: "ZeroShotClassification",
		display_name: "Zero-Shot Classification",
		arguments: &["text", "candidate_labels"],
		outputs: &["predicted_label"],
		models: &["Zero-Shot CLIP", "BART", "GPT-3"],
	},
	BuiltinNodeType {
		id: "Translation",
		display_name: "Translation",
		arguments: &["text", "target_language"],
		outputs: &["translated_text"],
		models: &["MarianMT", "T5", "NLLB-200"],
	},
	BuiltinNodeType {
		id: "Summarization",
		display_name: "Summarization",
		arguments: &["text"],
		outputs: &["summary"],
		models: &["BART", "T5", "Pegasus"],
	},
	BuiltinNodeType {
		id: "NLPFeatureExtraction",
		display_name: "NLP Feature Extraction",
		arguments: &["text"],
		outputs: &["text_features"],
		models: &["Word2Vec", "GloVe", "FastText"],
	},
	BuiltinNodeType {
		id: "TextGeneration",
		display_name: "Text Generation",
		arguments: &["text_prompt"],
		outputs: &["generated_text"],
		models: &["GPT-3", "GPT-2", "Transformer-XL"],
	},
	BuiltinNodeType {
		id: "Text2TextGeneration",
		display_name: "Text-to-Text Generation",
		arguments: &["input_text"],
		outputs: &["output_text"],
		models: &["T5", "BART", "Seq2Seq"],
	},
	BuiltinNodeType {
		id: "FillMask",
		display_name: "Fill Mask",
		arguments: &["masked_text"],
		outputs: &["filled_text"],
		models: &["BERT", "RoBERTa", "DistilBERT"],
	},
	BuiltinNodeType {
		id: "SentenceSimilarity",
		display_name: "Sentence Similarity",
		arguments: &["sentence1", "sentence2"],
		outputs: &["similarity_score"],
		models: &["Sentence-BERT", "Universal Sentence Encoder", "InferSent"],
	},
	BuiltinNodeType {
		id: "TextToSpeech",
		display_name: "Text to Speech",
		arguments: &["text"],
		outputs: &["audio"],
		models: &["Tacotron 2", "FastSpeech 2", "WaveNet"],
	},
	BuiltinNodeType {
		id: "TextToAudio",
		display_name: "Text to Audio",
		arguments: &["text"],
		outputs: &["audio"],
		models: &["Bark", "AudioLDM", "VALLE-X"],
	},
	BuiltinNodeType {
		id: "AutomaticSpeechRecognition",
		display_name: "Automatic Speech Recognition",
		arguments: &["audio"],
		outputs: &["transcription"],
		models: &["Whisper", "DeepSpeech", "Kaldi"],
	},
	BuiltinNodeType {
		id: "AudioToAudio",
		display_name: "Audio to Audio",
		arguments: &["input_audio", "style_audio"],
		outputs: &["output_audio"],
		models: &["Voice Conversion Model", "Audio Style Transfer Model"],
	},
	BuiltinNodeType {
		id: "AudioClassification",
		display_name: "Audio Classification",
		arguments: &["audio"],
		outputs: &["labels"],
		models: &["PANNs", "VGGish", "YamNet"],
	},
	BuiltinNodeType {
		id: "VoiceActivityDetection",
		display_name: "Voice Activity Detection",
		arguments: &["audio"],
		outputs: &["voice_segments"],
		models: &["pyannote.audio", "WebRTC VAD", "Silero VAD"],
	},
	BuiltinNodeType {
		id: "TabularClassification",
		display_name: "Tabular Classification",
		arguments: &["tabular_data", "target_feature"],
		outputs: &["predicted_class"],
		models: &["Logistic Regression", "Random Forest", "Gradient Boosting"],
	},
	BuiltinNodeType {
		id: "TabularRegression",
		display_name: "Tabular Regression",
		arguments: &["tabular_data", "target_feature"],
		outputs: &["predicted_value"],
		models: &["Linear Regression", "Support Vector Regression", "XGBoost"],
	},
	BuiltinNodeType {
		id: "TimeSeriesForecasting",
		display_name: "Time Series Forecasting",
		arguments: &["time_series_data", "forecast_horizon"],
		outputs: &["forecast"],
		models: &["ARIMA", "LSTM", "Prophet"],
	},
	BuiltinNodeType {
		id: "ReinforcementLearning",
		display_name: "Reinforcement Learning",
		arguments: &["environment_state"],
		outputs: &["action", "next_state"],
		models: &["PPO", "DQN", "A3C"],
	},
	BuiltinNodeType {
		id: "GraphMachineLearning",
		display_name: "Graph Machine Learning",
		arguments: &["graph_data"],
		outputs: &["graph_embeddings"],
		models: &["Graph Neural Networks (GNNs)", "GraphSAGE", "GAT"],
	},
	BuiltinNodeType {
		id: "HumanizeText",
		display_name: "Text Humanization",
		arguments: &["text"],
		outputs: &["humanized_text"],
		models: &["Humanizer Base", "Humanizer Pro"],
	},
	BuiltinNodeType {
		id: "GenericOp",
		display_name: "Generic Operation",
		arguments: &["input1", "input2"],
		outputs: &["output"],
		models: &["Custom Model", "Pre-trained Model", "Algorithm"],
	},
];
